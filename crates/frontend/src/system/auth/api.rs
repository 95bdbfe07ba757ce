use contracts::system::auth::{AuthSession, LoginRequest, OtpResendRequest, OtpVerifyRequest};
use contracts::shared::api::ApiError;

use crate::shared::http::{decode_result, post_public, success_message};

/// Login with email and password. The backend answers by mailing an OTP.
pub async fn login(request: &LoginRequest) -> Result<String, ApiError> {
    request.validate()?;
    let body = post_public("admin/login", request).await?;
    Ok(success_message(&body, "OTP sent to your email"))
}

/// Verify the OTP and receive the session token
pub async fn verify_otp(request: &OtpVerifyRequest) -> Result<AuthSession, ApiError> {
    request.validate()?;
    let body = post_public("admin/loginOTPVerify", request).await?;
    let session: AuthSession = decode_result(body)?;
    if !session.has_token() {
        return Err(ApiError::Decode("token missing in OTP response".to_string()));
    }
    Ok(session)
}

/// Send a new OTP to the same email
pub async fn resend_otp(email: &str) -> Result<String, ApiError> {
    let request = OtpResendRequest {
        email: email.to_string(),
    };
    let body = post_public("admin/forgotPasswordSendOTP", &request).await?;
    Ok(success_message(&body, "OTP resent successfully"))
}
