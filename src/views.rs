//! Server-rendered HTML for the booking page.

use std::fmt::Write;

use crate::middleware::flash::FlashMessages;
use crate::models::{
    bookings::BookingRecord,
    room::{PricingConfig, CURRENCY},
};

pub struct IndexPage<'a> {
    pub config: &'a PricingConfig,
    pub bookings: &'a [BookingRecord],
    pub total_bookings: usize,
    pub flashes: &'a FlashMessages,
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl IndexPage<'_> {
    pub fn render(&self) -> String {
        let mut html = String::new();
        html.push_str(
            "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>Hotel Booking</title>\n</head>\n<body>\n<h1>Hotel Booking</h1>\n",
        );

        self.render_flashes(&mut html);
        self.render_rates(&mut html);
        self.render_form(&mut html);
        self.render_bookings(&mut html);

        html.push_str("</body>\n</html>\n");
        html
    }

    fn render_flashes(&self, html: &mut String) {
        if self.flashes.is_empty() {
            return;
        }

        html.push_str("<ul class=\"flashes\">\n");
        for flash in self.flashes.iter() {
            let _ = writeln!(
                html,
                "<li class=\"flash {}\">{}</li>",
                flash.level.as_str(),
                escape_html(&flash.text)
            );
        }
        html.push_str("</ul>\n");
    }

    fn render_rates(&self, html: &mut String) {
        html.push_str(
            "<h2>Rooms</h2>\n<table class=\"rooms\">\n\
             <tr><th>Room</th><th>Max guests</th><th>Nightly rate</th></tr>\n",
        );
        for (room_type, room) in self.config.rooms.iter() {
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}{:.2}</td></tr>",
                escape_html(room_type),
                room.max_guests,
                CURRENCY,
                room.nightly_rate
            );
        }
        html.push_str("</table>\n");

        html.push_str(
            "<h2>Seasons</h2>\n<table class=\"seasons\">\n\
             <tr><th>Season</th><th>Multiplier</th></tr>\n",
        );
        for (season, multiplier) in self.config.seasons.iter() {
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{}</td></tr>",
                escape_html(season),
                multiplier
            );
        }
        html.push_str("</table>\n");
    }

    fn render_form(&self, html: &mut String) {
        html.push_str("<h2>New booking</h2>\n<form method=\"post\" action=\"/book\">\n");
        html.push_str("<label>Name <input name=\"name\" required></label>\n");

        html.push_str("<label>Room <select name=\"room_type\">\n");
        for (room_type, _) in self.config.rooms.iter() {
            let room_type = escape_html(room_type);
            let _ = writeln!(html, "<option value=\"{0}\">{0}</option>", room_type);
        }
        html.push_str("</select></label>\n");

        html.push_str("<label>Season <select name=\"season\">\n");
        for (season, _) in self.config.seasons.iter() {
            let season = escape_html(season);
            let _ = writeln!(html, "<option value=\"{0}\">{0}</option>", season);
        }
        html.push_str("</select></label>\n");

        html.push_str(
            "<label>Nights <input name=\"nights\" type=\"number\" value=\"1\"></label>\n\
             <label>Guests <input name=\"guests\" type=\"number\" value=\"1\"></label>\n\
             <label>Breakfast <input name=\"breakfast\" type=\"checkbox\" value=\"yes\"></label>\n\
             <label>Promo code <input name=\"promo_code\"></label>\n\
             <button type=\"submit\">Book</button>\n</form>\n",
        );
    }

    fn render_bookings(&self, html: &mut String) {
        let _ = writeln!(
            html,
            "<h2>Bookings</h2>\n<p class=\"total\">{} booking(s)</p>",
            self.total_bookings
        );

        if !self.bookings.is_empty() {
            html.push_str(
                "<table class=\"bookings\">\n<tr><th>Name</th><th>Room</th><th>Season</th>\
                 <th>Nights</th><th>Guests</th><th>Breakfast</th><th>Promo</th><th>Total</th></tr>\n",
            );
            for booking in self.bookings {
                let _ = writeln!(
                    html,
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}{:.2}</td></tr>",
                    escape_html(&booking.name),
                    escape_html(&booking.room_type),
                    escape_html(&booking.season),
                    booking.nights,
                    booking.guests,
                    if booking.breakfast { "yes" } else { "no" },
                    escape_html(&booking.promo_code),
                    CURRENCY,
                    booking.total_cost
                );
            }
            html.push_str("</table>\n");
        }

        html.push_str(
            "<form method=\"post\" action=\"/reset\">\
             <button type=\"submit\">Clear all bookings</button></form>\n",
        );
    }
}
