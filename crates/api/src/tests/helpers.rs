// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::{CreateClientRequest, CreateEventRequest, CreateShiftRequest};
use crate::{create_brand, create_client, create_event, CreateBrandRequest};
use presidio::{AppContext, LoggingPushTransport, SystemClock};
use presidio_domain::{Brand, Client, Event};
use std::sync::Arc;

pub fn create_test_context() -> AppContext {
    AppContext::new(Arc::new(SystemClock), Arc::new(LoggingPushTransport))
}

pub fn seed_event(context: &mut AppContext) -> (Client, Brand, Event) {
    let client: Client = create_client(
        context,
        CreateClientRequest {
            name: String::from("Alfa"),
            vat_number: String::from("12345678901"),
        },
    )
    .unwrap();
    let brand: Brand = create_brand(
        context,
        CreateBrandRequest {
            name: String::from("BrandX"),
            client_id: client.id.clone(),
        },
    )
    .unwrap();
    let event: Event = create_event(
        context,
        CreateEventRequest {
            title: String::from("Evento Alfa"),
            client_id: client.id.clone(),
            brand_id: brand.id.clone(),
            address: String::from("Via Roma 1"),
            activity_code: None,
            start_date: Some(String::from("2025-01-10")),
            end_date: None,
            notes: None,
        },
    )
    .unwrap();
    (client, brand, event)
}

pub fn overnight_shift_request() -> CreateShiftRequest {
    CreateShiftRequest {
        date: String::from("2025-01-10"),
        start_time: String::from("20:00"),
        end_time: String::from("04:00"),
        operator_ids: vec![String::new(), String::new()],
        activity_type: None,
        team_leader_id: None,
        required_operators: 2,
        notes: None,
        pause_hours: Some(1.0),
    }
}
