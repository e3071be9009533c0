use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Language;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadFormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// Trial application filled in after a calculator run.
/// Kept in memory only; nothing is sent or stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadForm {
    pub brand: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl LeadForm {
    pub fn validate(&self) -> Result<(), LeadFormError> {
        require(&self.brand, "Club / brand name")?;
        require(&self.contact, "Contact person")?;
        validate_email(&self.email)?;
        require(&self.phone, "Phone")?;
        require(&self.address, "Address")?;
        Ok(())
    }
}

fn require(value: &str, field: &'static str) -> Result<(), LeadFormError> {
    if value.trim().is_empty() {
        Err(LeadFormError::Missing(field))
    } else {
        Ok(())
    }
}

/// Email is optional; when present it needs a local part and a dotted domain.
pub fn validate_email(email: &str) -> Result<(), LeadFormError> {
    let email = email.trim();
    if email.is_empty() {
        return Ok(());
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(LeadFormError::InvalidEmail(email.to_string()))
    }
}

pub fn thank_you_message(lang: Language) -> &'static str {
    match lang {
        Language::ZhTw => "謝謝您提交申請，HyperSystem 團隊將會聯絡您並協助您啟用服務",
        Language::ZhCn => "谢谢您提交申请，HyperSystem 团队将会联络您并协助您启用服务",
        Language::Ja => {
            "お申し込みありがとうございます。HyperSystemチームよりご連絡し、サービスの有効化をサポートいたします。"
        }
        Language::En => {
            "Thank you for submitting your application. The HyperSystem team will contact you soon to help activate your service."
        }
    }
}

pub fn back_label(lang: Language) -> &'static str {
    match lang {
        Language::ZhTw | Language::ZhCn => "返回首頁",
        Language::Ja => "ホームに戻る",
        Language::En => "Back to Home",
    }
}
