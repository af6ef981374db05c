mod common;

use actix_web::{
    cookie::{time::Duration, Cookie},
    http::header,
    test,
};

use common::{booking_form, flashes_of, TestApp};
use hotel_booking_api::middleware::flash::{FlashLevel, FlashMessage, FLASH_COOKIE};

#[actix_rt::test]
async fn test_index_renders_catalog() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/html; charset=utf-8"
    );

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("<td>standard</td><td>2</td><td>CHF110.00</td>"));
    assert!(html.contains("<td>family</td><td>4</td><td>CHF165.00</td>"));
    assert!(html.contains("<td>low</td><td>1</td>"));
    assert!(html.contains("0 booking(s)"));
}

#[actix_rt::test]
async fn test_book_confirms_and_redirects() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let mut form = booking_form("Ada", "Suite", "LOW", "5", "1");
    form.push(("promo_code", "save10"));

    let req = test::TestRequest::post()
        .uri("/book")
        .set_form(&form)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    assert_eq!(
        flashes_of(&resp),
        vec![
            FlashMessage::success("Booking confirmed. Total cost: CHF940.50"),
            FlashMessage::info("Promo applied: SAVE10"),
        ]
    );
    assert_eq!(test_app.ledger.total_count(), 1);
}

#[actix_rt::test]
async fn test_index_shows_flashes_once() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/book")
        .set_form(&booking_form("", "standard", "low", "1", "1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == FLASH_COOKIE)
        .unwrap()
        .into_owned();

    let req = test::TestRequest::get().uri("/").cookie(cookie).to_request();
    let resp = test::call_service(&app, req).await;

    let removal = resp
        .response()
        .cookies()
        .find(|c| c.name() == FLASH_COOKIE)
        .unwrap();
    assert_eq!(removal.value(), "");
    assert_eq!(removal.max_age(), Some(Duration::ZERO));

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("<li class=\"flash error\">Please enter a guest name.</li>"));
}

#[actix_rt::test]
async fn test_rejections_leave_ledger_untouched() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let cases = [
        (
            booking_form("Ada", "standard", "low", "0", "1"),
            "Booking rejected (invalid nights/guests for room).",
        ),
        (
            booking_form("Ada", "standard", "low", "1", "2"),
            "Booking rejected (invalid nights/guests for room).",
        ),
        (
            booking_form("Ada", "penthouse", "low", "1", "1"),
            "Invalid room type or season.",
        ),
        (
            booking_form("Ada", "family", "winter", "1", "1"),
            "Invalid room type or season.",
        ),
        (
            booking_form("Ada", "family", "low", "one", "1"),
            "An unexpected error occurred.",
        ),
        (
            booking_form("  ", "family", "low", "1", "1"),
            "Please enter a guest name.",
        ),
    ];

    for (form, expected) in cases {
        let req = test::TestRequest::post()
            .uri("/book")
            .set_form(&form)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 303);
        let flashes = flashes_of(&resp);
        assert_eq!(flashes.len(), 1);
        assert_eq!(flashes[0].level, FlashLevel::Error);
        assert_eq!(flashes[0].text, expected);
    }

    assert_eq!(test_app.ledger.total_count(), 0);
}

#[actix_rt::test]
async fn test_non_form_body_is_treated_as_empty() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/book")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload(r#"{"name":"Ada"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 303);
    assert_eq!(
        flashes_of(&resp),
        vec![FlashMessage::error("Please enter a guest name.")]
    );
}

#[actix_rt::test]
async fn test_newest_booking_is_hidden() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    for name in ["Alice", "Bob", "Carol"] {
        let req = test::TestRequest::post()
            .uri("/book")
            .set_form(&booking_form(name, "family", "high", "2", "2"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 303);
    }

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();

    assert!(html.contains("3 booking(s)"));
    assert!(html.contains("<td>Alice</td>"));
    assert!(html.contains("<td>Bob</td>"));
    assert!(!html.contains("<td>Carol</td>"));
}

#[actix_rt::test]
async fn test_reset_clears_everything() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    for name in ["Alice", "Bob"] {
        let req = test::TestRequest::post()
            .uri("/book")
            .set_form(&booking_form(name, "standard", "low", "1", "1"))
            .to_request();
        test::call_service(&app, req).await;
    }
    assert_eq!(test_app.ledger.total_count(), 2);

    let req = test::TestRequest::post().uri("/reset").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    assert_eq!(
        flashes_of(&resp),
        vec![FlashMessage::info("All bookings cleared.")]
    );
    assert_eq!(test_app.ledger.total_count(), 0);
    assert!(test_app.ledger.display_list().is_empty());
}

#[actix_rt::test]
async fn test_repeated_field_uses_first_value() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/book")
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload(
            "name=Ada&room_type=standard&season=low&nights=1&guests=1&breakfast=yes&breakfast=no",
        )
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 303);
    assert_eq!(
        flashes_of(&resp),
        vec![FlashMessage::success("Booking confirmed. Total cost: CHF122.00")]
    );
    assert_eq!(test_app.ledger.total_count(), 1);
}

#[actix_rt::test]
async fn test_undecodable_flash_cookie_is_expired() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/")
        .cookie(Cookie::new(FLASH_COOKIE, "not.a.flash"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let removal = resp
        .response()
        .cookies()
        .find(|c| c.name() == FLASH_COOKIE)
        .unwrap();
    assert_eq!(removal.value(), "");
    assert_eq!(removal.max_age(), Some(Duration::ZERO));
}

#[actix_rt::test]
async fn test_pending_flashes_accumulate_across_redirects() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post().uri("/reset").to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == FLASH_COOKIE)
        .unwrap()
        .into_owned();

    let req = test::TestRequest::post()
        .uri("/book")
        .cookie(cookie)
        .set_form(&booking_form("", "standard", "low", "1", "1"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        flashes_of(&resp),
        vec![
            FlashMessage::info("All bookings cleared."),
            FlashMessage::error("Please enter a guest name."),
        ]
    );
}
