pub mod buildpass;
pub mod password_gen;
pub mod testpass;
pub mod wizard;
