pub mod auth;
pub mod bearer;

#[cfg(test)]
mod test;
