//! Fixed remediation texts per label.

use mg_common::Label;

/// Remediation advice for a detected label.
pub fn recommendation_for(label: &Label) -> &'static str {
    match label {
        Label::Password => {
            "CRITICAL: Never send a password by email. Use a password manager or a secure one-time link."
        }
        Label::Identifier => {
            "CRITICAL: Account identifiers must not transit by email. Use a secure channel."
        }
        Label::PinCode => "CRITICAL: PIN and secret codes must never be shared by email.",
        Label::ApiKey => {
            "CRITICAL: API keys belong in a secrets vault, never in an email body."
        }
        Label::AwsKey => {
            "CRITICAL: AWS key detected. Revoke it immediately if it has been exposed."
        }
        Label::GenericKey => "CRITICAL: API key detected. Never share it by email.",
        Label::JwtToken => {
            "CRITICAL: Authentication token detected. It grants access to an account or service."
        }
        Label::ConnectionString => {
            "CRITICAL: Database connection string detected. It is direct access to the system."
        }
        Label::CreditCard => "CRITICAL: Card number detected. Sending it violates PCI-DSS.",
        Label::Cvv => "CRITICAL: Card security code detected. Never transmit it by email.",
        Label::Iban => "HIGH: Bank account details detected. Fraud risk.",
        Label::SocialSecurity => "HIGH: Social security number. Highly sensitive data.",
        Label::Salary => "HIGH: Salary information detected. Confidential data.",
        Label::PrivateUrl => "MEDIUM: Internal URL detected. It may expose infrastructure.",
        Label::PrivateIp => {
            "MEDIUM: Private IP address detected. It may expose network topology."
        }
        Label::Email => "LOW: Email address detected. Double-check the recipient.",
        Label::Phone => "LOW: Phone number detected. Personal data.",
        Label::Name => "LOW: Person name detected. Confirm it needs to be shared.",
        Label::Sensitive | Label::Other(_) => {
            "Review whether this data needs to be included at all."
        }
    }
}
