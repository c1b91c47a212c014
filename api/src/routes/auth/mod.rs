//! User authentication routes: `/api/auth/*`.

mod forgot_password;
mod login;
mod reset_password;
mod verify_otp;

pub use forgot_password::forgot_password;
pub use login::login;
pub use reset_password::reset_password;
pub use verify_otp::verify_otp;
