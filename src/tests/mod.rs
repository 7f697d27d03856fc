// Membership function tests
mod membership;
