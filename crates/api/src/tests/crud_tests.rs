// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_context, seed_event};
use crate::{
    ApiError, CreateBrandRequest, CreateClientRequest, CreateOperatorRequest, CreateTaskRequest,
    UpdateClientRequest, UpdateOperatorRequest, UpdateTaskRequest, create_brand, create_client,
    create_operator, create_task, delete_client, get_brand, get_client,
    get_notification_preferences, list_brands, list_clients, mark_notification_read, update_client,
    update_operator, update_task,
};
use presidio::AppContext;
use presidio_domain::{Availability, NotificationPreferences};

#[test]
fn test_create_client_rejects_blank_name() {
    let mut context: AppContext = create_test_context();

    let result = create_client(
        &mut context,
        CreateClientRequest {
            name: String::from("   "),
            vat_number: String::from("12345678901"),
        },
    );

    match result {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "name"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_create_client_rejects_blank_vat_number() {
    let mut context: AppContext = create_test_context();

    let result = create_client(
        &mut context,
        CreateClientRequest {
            name: String::from("Alfa"),
            vat_number: String::new(),
        },
    );

    match result {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "vatNumber"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_get_client_unknown_returns_not_found() {
    let context: AppContext = create_test_context();

    let result = get_client(&context, "missing");

    match result {
        Err(ApiError::ResourceNotFound { resource_type, .. }) => {
            assert_eq!(resource_type, "Client");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_update_client_round_trip() {
    let mut context: AppContext = create_test_context();
    let (client, _, _) = seed_event(&mut context);

    let updated = update_client(
        &mut context,
        &client.id,
        UpdateClientRequest {
            name: Some(String::from("Alfa Srl")),
            vat_number: None,
        },
    )
    .unwrap();

    assert_eq!(updated.name, "Alfa Srl");
    assert_eq!(updated.vat_number, "12345678901");
    assert_eq!(list_clients(&context).len(), 1);
}

#[test]
fn test_create_brand_requires_existing_client() {
    let mut context: AppContext = create_test_context();

    let result = create_brand(
        &mut context,
        CreateBrandRequest {
            name: String::from("BrandX"),
            client_id: String::from("missing"),
        },
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_delete_client_cascade_reaches_brand() {
    let mut context: AppContext = create_test_context();
    let (client, brand, _) = seed_event(&mut context);

    delete_client(&mut context, &client.id);

    assert!(get_brand(&context, &brand.id).is_err());
    assert!(list_brands(&context, Some(&client.id)).is_empty());
}

#[test]
fn test_create_operator_defaults_to_available() {
    let mut context: AppContext = create_test_context();

    let operator = create_operator(
        &mut context,
        CreateOperatorRequest {
            name: String::from("Luca Bianchi"),
            role: String::from("GPG"),
            availability: Availability::default(),
        },
    )
    .unwrap();

    assert_eq!(operator.availability, Availability::Available);
}

#[test]
fn test_update_operator_unknown_returns_not_found() {
    let mut context: AppContext = create_test_context();

    let result = update_operator(&mut context, "missing", UpdateOperatorRequest::default());

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_preferences_default_when_never_stored() {
    let mut context: AppContext = create_test_context();
    let operator = create_operator(
        &mut context,
        CreateOperatorRequest {
            name: String::from("Luca"),
            role: String::new(),
            availability: Availability::default(),
        },
    )
    .unwrap();

    let preferences: NotificationPreferences =
        get_notification_preferences(&context, &operator.id).unwrap();

    assert!(!preferences.shift_assignment);
    assert!(!preferences.shift_updates);
    assert!(!preferences.shift_cancellation);
}

#[test]
fn test_mark_notification_read_unknown_notification() {
    let mut context: AppContext = create_test_context();
    let operator = create_operator(
        &mut context,
        CreateOperatorRequest {
            name: String::from("Luca"),
            role: String::new(),
            availability: Availability::default(),
        },
    )
    .unwrap();

    let result = mark_notification_read(&mut context, &operator.id, "missing");

    match result {
        Err(ApiError::ResourceNotFound { resource_type, .. }) => {
            assert_eq!(resource_type, "Notification");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_task_lifecycle() {
    let mut context: AppContext = create_test_context();
    let (_, _, event) = seed_event(&mut context);

    let task = create_task(
        &mut context,
        &event.id,
        CreateTaskRequest {
            title: String::from("Sopralluogo"),
        },
    )
    .unwrap();
    assert!(!task.completed);

    let updated = update_task(
        &mut context,
        &task.id,
        UpdateTaskRequest {
            title: None,
            completed: Some(true),
        },
    )
    .unwrap();
    assert!(updated.completed);
    assert_eq!(updated.title, "Sopralluogo");
}
