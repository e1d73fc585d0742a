#![allow(dead_code)]

use chrono::NaiveDate;
use lending_library::adapters::mock::FixedClock;
use lending_library::application::lending::LendingService;
use lending_library::domain::{Book, BookId, Member, MemberId};
use std::sync::Arc;

/// テスト共通の開始日
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

/// 固定時計を使う空のサービスを作成
///
/// 時計も返すので、テスト側で日付を進められる。
pub fn create_test_service() -> (LendingService, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(start_date()));
    let service = LendingService::new(clock.clone());
    (service, clock)
}

/// 書籍1冊（指定冊数）と会員1人を登録済みのサービスを作成
pub fn create_service_with(copies: u32) -> (LendingService, Arc<FixedClock>) {
    let (mut service, clock) = create_test_service();
    service
        .register_book(Book::new(BookId::new(1), "Java Programming", "John Doe", copies))
        .unwrap();
    service
        .register_member(Member::new(MemberId::new(1), "Alice", "alice@example.com"))
        .unwrap();
    (service, clock)
}
