//! Reservation subsystem integration tests.
//!
//! Drives the three stores over real JSON files and checks that the hotel room
//! counters follow the reservations.

mod fixtures;

use fixtures::{TestSystem, customer_id, hotel_id, reservation_id};
use innkeeper::{
    domain::{CustomerPatch, HotelPatch, ReservationDate},
    usecase::{CustomerStoreError, HotelStoreError, ReservationStoreError},
};

fn seed_hotel(t: &TestSystem, id: &str, total_rooms: u32) {
    t.system
        .hotels
        .create(
            hotel_id(id),
            format!("Hotel {}", id),
            "Monterrey".to_string(),
            total_rooms,
        )
        .unwrap();
}

fn seed_customer(t: &TestSystem, id: &str) {
    t.system
        .customers
        .create(
            customer_id(id),
            format!("Customer {}", id),
            format!("{}@example.com", id.to_lowercase()),
        )
        .unwrap();
}

#[test]
fn test_single_room_hotel_scenario() {
    // テスト項目: 1 部屋のホテルで予約・満室・取消・再予約が正しく動作する
    // given (前提条件):
    let t = TestSystem::new();
    seed_hotel(&t, "H1", 1);
    seed_customer(&t, "C1");
    let reservations = &t.system.reservations;

    // when (操作) / then (期待する結果): R1 は成功
    reservations
        .create(reservation_id("R1"), hotel_id("H1"), customer_id("C1"), None)
        .unwrap();
    assert_eq!(t.reserved_rooms("H1"), 1);

    // R2 は満室で失敗
    let result = reservations.create(reservation_id("R2"), hotel_id("H1"), customer_id("C1"), None);
    assert!(matches!(result, Err(ReservationStoreError::NoAvailability(_))));
    assert_eq!(t.reserved_rooms("H1"), 1);

    // R1 を取り消すと部屋が空く
    reservations.cancel(&reservation_id("R1")).unwrap();
    assert_eq!(t.reserved_rooms("H1"), 0);

    // R2 が成功する
    reservations
        .create(reservation_id("R2"), hotel_id("H1"), customer_id("C1"), None)
        .unwrap();
    assert_eq!(t.reserved_rooms("H1"), 1);
}

#[test]
fn test_reservation_for_missing_hotel_changes_nothing() {
    // テスト項目: 存在しないホテルへの予約は予約も作らずホテルも変更しない
    // given (前提条件):
    let t = TestSystem::new();
    seed_hotel(&t, "H1", 2);
    seed_customer(&t, "C1");
    let hotels_before = t.system.hotels.load().unwrap();

    // when (操作):
    let result = t.system.reservations.create(
        reservation_id("R1"),
        hotel_id("NOPE"),
        customer_id("C1"),
        None,
    );

    // then (期待する結果):
    assert!(matches!(result, Err(ReservationStoreError::HotelNotFound(_))));
    assert!(t.system.reservations.load().unwrap().is_empty());
    assert_eq!(t.system.hotels.load().unwrap(), hotels_before);
}

#[test]
fn test_reserved_rooms_match_active_reservations() {
    // テスト項目: 予約の作成・取消を繰り返しても予約済み部屋数は有効な予約数と一致する
    // given (前提条件):
    let t = TestSystem::new();
    seed_hotel(&t, "H1", 3);
    seed_hotel(&t, "H2", 2);
    seed_customer(&t, "C1");
    seed_customer(&t, "C2");
    let reservations = &t.system.reservations;

    // when (操作):
    let plan = [
        ("R1", "H1", "C1"),
        ("R2", "H1", "C2"),
        ("R3", "H2", "C1"),
        ("R4", "H1", "C1"),
        ("R5", "H1", "C2"), // 満室
        ("R6", "H2", "C2"),
        ("R7", "H2", "C2"), // 満室
    ];
    for (r, h, c) in plan {
        let _ = reservations.create(reservation_id(r), hotel_id(h), customer_id(c), None);
    }
    reservations.cancel(&reservation_id("R2")).unwrap();
    reservations.cancel(&reservation_id("R3")).unwrap();
    reservations
        .create(reservation_id("R8"), hotel_id("H1"), customer_id("C2"), None)
        .unwrap();

    // then (期待する結果):
    let active = reservations.load().unwrap();
    for hotel in t.system.hotels.load().unwrap().values() {
        let count = active
            .values()
            .filter(|r| r.hotel_id() == &hotel.id)
            .count() as u32;
        assert_eq!(hotel.reserved_rooms(), count, "hotel {}", hotel.id);
        assert!(hotel.reserved_rooms() <= hotel.total_rooms());
    }
    assert_eq!(t.reserved_rooms("H1"), 3);
    assert_eq!(t.reserved_rooms("H2"), 1);
}

#[test]
fn test_duplicate_ids_are_rejected_everywhere() {
    // テスト項目: 既存 ID での作成はすべて失敗し、既存レコードは変わらない
    // given (前提条件):
    let t = TestSystem::new();
    seed_hotel(&t, "H1", 2);
    seed_customer(&t, "C1");
    t.system
        .reservations
        .create(
            reservation_id("R1"),
            hotel_id("H1"),
            customer_id("C1"),
            Some(ReservationDate::parse("2025-01-01").unwrap()),
        )
        .unwrap();

    // when (操作):
    let hotel = t
        .system
        .hotels
        .create(hotel_id("H1"), "X".to_string(), "Y".to_string(), 99);
    let customer = t.system.customers.create(
        customer_id("C1"),
        "X".to_string(),
        "x@example.com".to_string(),
    );
    let reservation = t.system.reservations.create(
        reservation_id("R1"),
        hotel_id("H1"),
        customer_id("C1"),
        None,
    );

    // then (期待する結果):
    assert!(matches!(hotel, Err(HotelStoreError::AlreadyExists(_))));
    assert!(matches!(customer, Err(CustomerStoreError::AlreadyExists(_))));
    assert!(matches!(
        reservation,
        Err(ReservationStoreError::AlreadyExists(_))
    ));
    assert_eq!(t.system.hotels.get(&hotel_id("H1")).unwrap().total_rooms(), 2);
    assert_eq!(
        t.system.customers.get(&customer_id("C1")).unwrap().name,
        "Customer C1"
    );
    assert_eq!(
        t.system
            .reservations
            .get(&reservation_id("R1"))
            .unwrap()
            .date()
            .to_string(),
        "2025-01-01"
    );
    assert_eq!(t.reserved_rooms("H1"), 1);
}

#[test]
fn test_collections_survive_reopening() {
    // テスト項目: 別のインスタンスから読み込んでも同じレコードが得られる
    // given (前提条件):
    let t = TestSystem::new();
    seed_hotel(&t, "H1", 2);
    seed_customer(&t, "C1");
    t.system
        .reservations
        .create(reservation_id("R1"), hotel_id("H1"), customer_id("C1"), None)
        .unwrap();

    // when (操作):
    let reopened = t.reopen();

    // then (期待する結果):
    assert_eq!(
        reopened.hotels.load().unwrap(),
        t.system.hotels.load().unwrap()
    );
    assert_eq!(
        reopened.customers.load().unwrap(),
        t.system.customers.load().unwrap()
    );
    assert_eq!(
        reopened.reservations.load().unwrap(),
        t.system.reservations.load().unwrap()
    );
}

#[test]
fn test_partial_modify_keeps_other_fields() {
    // テスト項目: 一部のフィールドだけを更新すると他のフィールドは保持される
    // given (前提条件):
    let t = TestSystem::new();
    seed_hotel(&t, "H1", 2);
    seed_customer(&t, "C1");

    // when (操作):
    t.system
        .hotels
        .modify(
            &hotel_id("H1"),
            HotelPatch {
                total_rooms: Some(5),
                ..HotelPatch::default()
            },
        )
        .unwrap();
    t.system
        .customers
        .modify(
            &customer_id("C1"),
            CustomerPatch {
                email: Some("new@example.com".to_string()),
                ..CustomerPatch::default()
            },
        )
        .unwrap();

    // then (期待する結果):
    let hotel = t.system.hotels.get(&hotel_id("H1")).unwrap();
    assert_eq!(hotel.name, "Hotel H1");
    assert_eq!(hotel.location, "Monterrey");
    assert_eq!(hotel.total_rooms(), 5);
    let customer = t.system.customers.get(&customer_id("C1")).unwrap();
    assert_eq!(customer.name, "Customer C1");
    assert_eq!(customer.email, "new@example.com");
}

#[test]
fn test_corrupted_hotel_file_is_treated_as_empty() {
    // テスト項目: 壊れたホテルファイルは空として扱われ、操作は継続できる
    // given (前提条件):
    let t = TestSystem::new();
    seed_hotel(&t, "H1", 2);
    std::fs::write(t.dir().join("hotels.json"), "{\"H1\": ").unwrap();

    // when (操作):
    let lookup = t.system.hotels.get(&hotel_id("H1"));
    let recreate = t.system.hotels.create(
        hotel_id("H1"),
        "Rebuilt".to_string(),
        "Monterrey".to_string(),
        1,
    );

    // then (期待する結果):
    assert!(matches!(lookup, Err(HotelStoreError::NotFound(_))));
    assert!(recreate.is_ok());
    assert_eq!(t.system.hotels.get(&hotel_id("H1")).unwrap().name, "Rebuilt");
}

#[test]
fn test_direct_room_operations_share_counter_with_reservations() {
    // テスト項目: ホテル単体の部屋予約は予約レコードなしで容量を消費する
    // given (前提条件):
    let t = TestSystem::new();
    seed_hotel(&t, "H1", 1);
    seed_customer(&t, "C1");

    // when (操作):
    t.system.hotels.reserve_room(&hotel_id("H1")).unwrap();
    let result = t.system.reservations.create(
        reservation_id("R1"),
        hotel_id("H1"),
        customer_id("C1"),
        None,
    );

    // then (期待する結果):
    assert!(matches!(result, Err(ReservationStoreError::NoAvailability(_))));
    t.system.hotels.cancel_reservation(&hotel_id("H1")).unwrap();
    assert_eq!(t.reserved_rooms("H1"), 0);
}
