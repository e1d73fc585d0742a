use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::{BookId, LoanId, MarkReturnedError, MemberId};

/// 貸出期間（日数）
pub const LOAN_PERIOD_DAYS: i64 = 14;

/// 貸出ステータス
///
/// 返却日の有無から導出される。延滞は状態として持たない（返却期限は表示用）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    /// 貸出中
    Active,
    /// 返却済み
    Returned,
}

/// 貸出記録 - 1冊の書籍の1回の貸出
///
/// 書籍・会員はIDでのみ参照し、そのライフサイクルには関与しない。
/// 生成後に変化するのは`returned_on`のみで、一度だけ設定される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Loan {
    loan_id: LoanId,

    // 他の集約への参照（IDのみ）
    book_id: BookId,
    member_id: MemberId,

    loaned_on: NaiveDate,
    due_on: NaiveDate,
    returned_on: Option<NaiveDate>,
}

impl Loan {
    pub fn new(book_id: BookId, member_id: MemberId, loaned_on: NaiveDate, due_on: NaiveDate) -> Self {
        Self {
            loan_id: LoanId::new(),
            book_id,
            member_id,
            loaned_on,
            due_on,
            returned_on: None,
        }
    }

    pub fn loan_id(&self) -> LoanId {
        self.loan_id
    }

    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    pub fn member_id(&self) -> MemberId {
        self.member_id
    }

    pub fn loaned_on(&self) -> NaiveDate {
        self.loaned_on
    }

    pub fn due_on(&self) -> NaiveDate {
        self.due_on
    }

    pub fn returned_on(&self) -> Option<NaiveDate> {
        self.returned_on
    }

    pub fn is_active(&self) -> bool {
        self.returned_on.is_none()
    }

    pub fn status(&self) -> LoanStatus {
        if self.is_active() {
            LoanStatus::Active
        } else {
            LoanStatus::Returned
        }
    }

    /// 指定の書籍・会員の組に対する貸出か
    pub fn matches(&self, book_id: BookId, member_id: MemberId) -> bool {
        self.book_id == book_id && self.member_id == member_id
    }

    /// 延滞判定（情報提供のみ。貸出・返却の可否には影響しない）
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_active() && today > self.due_on
    }

    /// 返却日を記録する
    ///
    /// # エラー
    /// 既に返却済みの場合は`MarkReturnedError::AlreadyReturned`を返し、
    /// 記録済みの返却日は上書きしない
    pub fn mark_returned(&mut self, returned_on: NaiveDate) -> Result<(), MarkReturnedError> {
        if self.returned_on.is_some() {
            return Err(MarkReturnedError::AlreadyReturned);
        }
        self.returned_on = Some(returned_on);
        Ok(())
    }
}

/// 純粋関数：書籍を貸し出す
///
/// ビジネスルール：
/// - 貸出期間は14日間
/// - 返却日は未設定（貸出中）
pub fn loan_book(book_id: BookId, member_id: MemberId, loaned_on: NaiveDate) -> Loan {
    let due_on = loaned_on + Duration::days(LOAN_PERIOD_DAYS);
    Loan::new(book_id, member_id, loaned_on, due_on)
}
