use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error,
};

use hotel_booking_api::{
    middleware::flash::{FlashMessage, FlashMessages, FLASH_COOKIE},
    models::room::PricingConfig,
    routes,
    services::booking_ledger::BookingLedger,
};

pub struct TestApp {
    pub pricing: web::Data<PricingConfig>,
    pub ledger: web::Data<BookingLedger>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            pricing: web::Data::new(PricingConfig::default()),
            ledger: web::Data::new(BookingLedger::new()),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(Logger::default())
            .app_data(self.pricing.clone())
            .app_data(self.ledger.clone())
            .configure(routes::config)
    }
}

pub fn booking_form<'a>(
    name: &'a str,
    room_type: &'a str,
    season: &'a str,
    nights: &'a str,
    guests: &'a str,
) -> Vec<(&'static str, &'a str)> {
    vec![
        ("name", name),
        ("room_type", room_type),
        ("season", season),
        ("nights", nights),
        ("guests", guests),
    ]
}

/// Flash messages set on a response, in order.
pub fn flashes_of<B>(resp: &ServiceResponse<B>) -> Vec<FlashMessage> {
    resp.response()
        .cookies()
        .find(|c| c.name() == FLASH_COOKIE)
        .map(|c| FlashMessages::decode(c.value()).0)
        .unwrap_or_default()
}
