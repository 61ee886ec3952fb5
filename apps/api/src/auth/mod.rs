// Operator authentication: password hashing and bearer tokens

pub mod jwt;
pub mod password;
