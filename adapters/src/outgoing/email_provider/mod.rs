pub mod console_email_provider;
pub mod resend_http;
