mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_slot_grid_on_open_day() {
    let app = TestApp::new().await;
    let service_id = seed_service(&app, "Limpieza de Cutis Profunda", "60 min", 45).await;
    seed_team_member(&app, "Lucía").await;
    let date = next_open_date();

    let res = get(&app, &format!("/api/v1/availability/slots?date={}&service_id={}", date, service_id)).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    let slots = body["slots"].as_array().unwrap();

    // 09:00-19:00 at 30-minute intervals, minus the tail that would overrun
    // closing with a 60-minute service (18:30 still fits nothing).
    assert_eq!(slots[0].as_str().unwrap(), "09:00");
    assert!(slots.iter().all(|s| {
        let s = s.as_str().unwrap();
        s.len() == 5 && &s[2..3] == ":"
    }));
    // 18:30 + 60min runs past closing; last bookable start is 18:00.
    assert!(!slots.iter().any(|s| s.as_str().unwrap() == "18:30"));
    assert!(slots.iter().any(|s| s.as_str().unwrap() == "18:00"));
}

#[tokio::test]
async fn test_full_grid_for_short_service() {
    let app = TestApp::new().await;
    let service_id = seed_service(&app, "Diseño de Cejas", "30 min", 15).await;
    seed_team_member(&app, "Lucía").await;
    let date = next_open_date();

    let res = get(&app, &format!("/api/v1/availability/slots?date={}&service_id={}", date, service_id)).await;
    let body = parse_body(res).await;
    let slots = body["slots"].as_array().unwrap();

    // (19 - 9) * 60 / 30 slots, nothing filtered.
    assert_eq!(slots.len(), 20);
    assert_eq!(slots[0].as_str().unwrap(), "09:00");
    assert_eq!(slots[19].as_str().unwrap(), "18:30");
}

#[tokio::test]
async fn test_slots_empty_on_weekend() {
    let app = TestApp::new().await;
    let service_id = seed_service(&app, "Limpieza de Cutis Profunda", "60 min", 45).await;
    seed_team_member(&app, "Lucía").await;

    let res = get(&app, &format!("/api/v1/availability/slots?date={}&service_id={}", next_saturday_date(), service_id)).await;
    let body = parse_body(res).await;
    assert!(body["slots"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_slots_empty_on_holiday() {
    let app = TestApp::new().await;
    let service_id = seed_service(&app, "Limpieza de Cutis Profunda", "60 min", 45).await;
    seed_team_member(&app, "Lucía").await;

    let res = get(&app, &format!("/api/v1/availability/slots?date={}&service_id={}", future_christmas_date(), service_id)).await;
    let body = parse_body(res).await;
    assert!(body["slots"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_slots_empty_without_team() {
    let app = TestApp::new().await;
    let service_id = seed_service(&app, "Limpieza de Cutis Profunda", "60 min", 45).await;

    let res = get(&app, &format!("/api/v1/availability/slots?date={}&service_id={}", next_open_date(), service_id)).await;
    let body = parse_body(res).await;
    assert!(body["slots"].as_array().unwrap().is_empty(), "no staff means zero capacity");
}

#[tokio::test]
async fn test_blocked_professional_removes_all_capacity() {
    let app = TestApp::new().await;
    let service_id = seed_service(&app, "Limpieza de Cutis Profunda", "60 min", 45).await;
    let pro = seed_team_member(&app, "Lucía").await;
    let date = next_open_date();
    seed_block(&app, &pro, &date).await;

    let res = get(&app, &format!("/api/v1/availability/slots?date={}&service_id={}", date, service_id)).await;
    let body = parse_body(res).await;
    assert!(body["slots"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_booked_slot_is_consumed() {
    let app = TestApp::new().await;
    let service_id = seed_service(&app, "Limpieza de Cutis Profunda", "60 min", 45).await;
    seed_team_member(&app, "Lucía").await;
    let date = next_open_date();

    let res = post_json(&app, "/api/v1/bookings", json!({
        "service_id": service_id,
        "date": date,
        "time": "10:00",
        "client_name": "Ana",
        "client_phone": "600111222",
        "payment_method": "cash"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = get(&app, &format!("/api/v1/availability/slots?date={}&service_id={}", date, service_id)).await;
    let body = parse_body(res).await;
    let slots: Vec<&str> = body["slots"].as_array().unwrap().iter().map(|s| s.as_str().unwrap()).collect();

    // The booking holds [10:00, 11:00); any 60-minute request overlapping
    // that interval is gone, including ones starting inside it.
    assert!(slots.contains(&"09:00"));
    assert!(!slots.contains(&"09:30"));
    assert!(!slots.contains(&"10:00"));
    assert!(!slots.contains(&"10:30"));
    assert!(slots.contains(&"11:00"));
}

#[tokio::test]
async fn test_available_dates_skip_closed_days() {
    let app = TestApp::new().await;
    let service_id = seed_service(&app, "Diseño de Cejas", "30 min", 15).await;
    seed_team_member(&app, "Lucía").await;

    let start = next_open_date();
    let start_date = chrono::NaiveDate::parse_from_str(&start, "%Y-%m-%d").unwrap();
    let end_date = start_date + chrono::Duration::days(9);
    let end = end_date.format("%Y-%m-%d").to_string();

    let res = get(&app, &format!("/api/v1/availability/dates?start={}&end={}&service_id={}", start, end, service_id)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let dates = parse_body(res).await;
    let dates: Vec<&str> = dates.as_array().unwrap().iter().map(|d| d.as_str().unwrap()).collect();

    assert!(dates.contains(&start.as_str()));
    // A 10-day window always crosses a weekend; none of those days may leak.
    let mut cursor = start_date;
    while cursor <= end_date {
        use chrono::Datelike;
        let key = cursor.format("%Y-%m-%d").to_string();
        let is_weekend = matches!(cursor.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun);
        if is_weekend {
            assert!(!dates.contains(&key.as_str()), "weekend date {} leaked", key);
        }
        cursor += chrono::Duration::days(1);
    }
}

#[tokio::test]
async fn test_dates_range_validation() {
    let app = TestApp::new().await;

    let res = get(&app, "/api/v1/availability/dates?start=2026-10-10&end=2026-10-01").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = get(&app, "/api/v1/availability/dates?start=2026-01-01&end=2026-12-31").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
