use crate::services::SmsService;
use rocket::form::{Form, Lenient};
use rocket::http::ContentType;
use rocket::{FromForm, get, post};

/// Inbound webhook payload from the provider. The fields are accepted but
/// deliberately ignored; the reply is fixed.
#[derive(FromForm, Debug)]
pub struct InboundSms {
    #[field(name = "From")]
    pub from: Option<String>,
    #[field(name = "Body")]
    pub body: Option<String>,
}

/// Respond to incoming messages with the fixed acknowledgment, formatted
/// as TwiML for the provider's messaging client
#[post("/sms", data = "<_incoming>")]
pub async fn sms_reply(_incoming: Form<Lenient<InboundSms>>) -> (ContentType, &'static str) {
    (ContentType::XML, SmsService::reply_twiml())
}

/// Some provider configurations deliver the webhook as GET
#[get("/sms")]
pub async fn sms_reply_get() -> (ContentType, &'static str) {
    (ContentType::XML, SmsService::reply_twiml())
}
