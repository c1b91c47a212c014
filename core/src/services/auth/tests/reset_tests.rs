//! Password-reset flow tests.

use std::sync::Arc;

use crate::domain::entities::{Affiliate, User};
use crate::errors::{AuthError, DomainError};
use crate::repositories::{
    AccountStore, MockAffiliateStore, MockSettingRepository, MockUserStore,
};
use crate::services::auth::{
    PasswordResetConfig, PasswordResetService, FORGOT_PASSWORD_TEMPLATE_SETTING,
};
use crate::services::encryption::PasswordCipher;

use super::mocks::MockEmailSender;

fn cipher() -> Arc<PasswordCipher> {
    Arc::new(PasswordCipher::from_key_bytes(&[5u8; 32]).unwrap())
}

fn settings_with_template() -> Arc<MockSettingRepository> {
    Arc::new(
        MockSettingRepository::new()
            .with_setting(FORGOT_PASSWORD_TEMPLATE_SETTING, "Hi {name}, code: {otp}"),
    )
}

fn seeded_user(cipher: &PasswordCipher) -> User {
    User::new(
        1,
        "jdoe",
        "a@b.com",
        "Jane",
        cipher.encrypt("old password").unwrap(),
        2,
    )
}

fn reset_service(
    store: Arc<MockUserStore>,
    settings: Arc<MockSettingRepository>,
    email: Arc<MockEmailSender>,
    cipher: Arc<PasswordCipher>,
) -> PasswordResetService<MockUserStore, MockSettingRepository, MockEmailSender> {
    PasswordResetService::new(store, settings, email, cipher, PasswordResetConfig::default())
}

#[tokio::test]
async fn test_forgot_password_unknown_email_is_not_found() {
    let service = reset_service(
        Arc::new(MockUserStore::new()),
        settings_with_template(),
        Arc::new(MockEmailSender::new()),
        cipher(),
    );

    let err = service.forgot_password("ghost@b.com").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::EmailNotRegistered)
    ));
    assert_eq!(
        err.to_string(),
        "Email not found. Please register first."
    );
}

#[tokio::test]
async fn test_forgot_password_stores_and_sends_six_digit_code() {
    let cipher = cipher();
    let store = Arc::new(MockUserStore::with_user(seeded_user(&cipher)));
    let email = Arc::new(MockEmailSender::new());
    let service = reset_service(store.clone(), settings_with_template(), email.clone(), cipher);

    service.forgot_password("a@b.com").await.unwrap();

    let sent = email.last_sent().unwrap();
    assert_eq!(sent.email, "a@b.com");
    assert_eq!(sent.name, "Jane");
    assert_eq!(sent.otp.len(), 6);
    assert!(sent.otp.chars().all(|c| c.is_ascii_digit()));

    // The stored code is the one that was delivered
    let stored = store.otp_for("a@b.com").await.unwrap().unwrap();
    assert_eq!(stored, sent.otp);
}

#[tokio::test]
async fn test_reissue_invalidates_previous_code() {
    let cipher = cipher();
    let store = Arc::new(MockUserStore::with_user(seeded_user(&cipher)));
    let email = Arc::new(MockEmailSender::new());
    let service = reset_service(store, settings_with_template(), email.clone(), cipher);

    service.forgot_password("a@b.com").await.unwrap();
    let first = email.last_sent().unwrap().otp;

    // Loop until the second draw differs; otherwise the overwrite would
    // be indistinguishable from a no-op.
    let second = loop {
        service.forgot_password("a@b.com").await.unwrap();
        let otp = email.last_sent().unwrap().otp;
        if otp != first {
            break otp;
        }
    };

    assert!(matches!(
        service.verify_otp("a@b.com", &first).await.unwrap_err(),
        DomainError::Auth(AuthError::InvalidOtp)
    ));
    service.verify_otp("a@b.com", &second).await.unwrap();
}

#[tokio::test]
async fn test_verify_otp_requires_exact_match() {
    let cipher = cipher();
    let store = Arc::new(MockUserStore::with_user(seeded_user(&cipher)));
    store.update_otp("a@b.com", "123456").await.unwrap();
    let service = reset_service(
        store,
        settings_with_template(),
        Arc::new(MockEmailSender::new()),
        cipher,
    );

    service.verify_otp("a@b.com", "123456").await.unwrap();

    for wrong in ["654321", "12345", "1234567", ""] {
        let err = service.verify_otp("a@b.com", wrong).await.unwrap_err();
        assert!(
            matches!(err, DomainError::Auth(AuthError::InvalidOtp)),
            "code {:?} must be rejected",
            wrong
        );
        assert_eq!(err.to_string(), "Invalid OTP.");
    }
}

#[tokio::test]
async fn test_verify_otp_without_stored_code_is_rejected() {
    let cipher = cipher();
    let store = Arc::new(MockUserStore::with_user(seeded_user(&cipher)));
    let service = reset_service(
        store,
        settings_with_template(),
        Arc::new(MockEmailSender::new()),
        cipher,
    );

    assert!(matches!(
        service.verify_otp("a@b.com", "123456").await.unwrap_err(),
        DomainError::Auth(AuthError::InvalidOtp)
    ));
}

#[tokio::test]
async fn test_send_failure_is_reported_but_code_stays_stored() {
    let cipher = cipher();
    let store = Arc::new(MockUserStore::with_user(seeded_user(&cipher)));
    let service = reset_service(
        store.clone(),
        settings_with_template(),
        Arc::new(MockEmailSender::failing()),
        cipher,
    );

    let err = service.forgot_password("a@b.com").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::OtpSendFailed)));

    // No rollback: the account is left in "OTP issued but undelivered"
    let stored = store.otp_for("a@b.com").await.unwrap().unwrap();
    service.verify_otp("a@b.com", &stored).await.unwrap();
}

#[tokio::test]
async fn test_missing_template_is_reported_but_code_stays_stored() {
    let cipher = cipher();
    let store = Arc::new(MockUserStore::with_user(seeded_user(&cipher)));
    let email = Arc::new(MockEmailSender::new());
    let service = reset_service(
        store.clone(),
        Arc::new(MockSettingRepository::new()),
        email.clone(),
        cipher,
    );

    let err = service.forgot_password("a@b.com").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::EmailTemplateMissing)
    ));
    assert_eq!(email.sent_count(), 0);
    assert!(store.otp_for("a@b.com").await.unwrap().is_some());
}

#[tokio::test]
async fn test_reset_password_encrypts_on_write() {
    let cipher = cipher();
    let store = Arc::new(MockUserStore::with_user(seeded_user(&cipher)));
    let service = reset_service(
        store.clone(),
        settings_with_template(),
        Arc::new(MockEmailSender::new()),
        cipher.clone(),
    );

    service.reset_password("a@b.com", "new password").await.unwrap();

    let stored = store.get("a@b.com").await.unwrap().password;
    assert_ne!(stored, "new password");
    assert_eq!(cipher.decrypt(&stored).unwrap(), "new password");
}

#[tokio::test]
async fn test_reset_password_unknown_email_is_not_found() {
    let service = reset_service(
        Arc::new(MockUserStore::new()),
        settings_with_template(),
        Arc::new(MockEmailSender::new()),
        cipher(),
    );

    let err = service
        .reset_password("ghost@b.com", "new password")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::AccountNotFound)
    ));
}

#[tokio::test]
async fn test_inactive_affiliate_cannot_request_or_reset() {
    let cipher = cipher();
    let mut affiliate = Affiliate::new(
        9,
        "acme",
        "acme@partners.com",
        "Ada",
        cipher.encrypt("old password").unwrap(),
    );
    affiliate.deactivate();

    let service = PasswordResetService::new(
        Arc::new(MockAffiliateStore::with_affiliate(affiliate)),
        settings_with_template(),
        Arc::new(MockEmailSender::new()),
        cipher,
        PasswordResetConfig::for_affiliates(),
    );

    assert!(matches!(
        service.forgot_password("acme@partners.com").await.unwrap_err(),
        DomainError::Auth(AuthError::AccountInactive)
    ));
    assert!(matches!(
        service
            .reset_password("acme@partners.com", "new password")
            .await
            .unwrap_err(),
        DomainError::Auth(AuthError::AccountInactive)
    ));
}
