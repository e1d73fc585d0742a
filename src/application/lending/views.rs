use std::fmt;
use std::ops::Deref;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Book, BookId, Loan, LoanId, LoanStatus, Member, MemberId};

/// 貸出記録と、その参照先の書籍・会員をまとめた読み取り専用ビュー
///
/// 表示用の文字列表現は書籍タイトルと会員名を必要とするため、
/// `Loan`単体ではなくこのビューが持つ。
#[derive(Debug, Clone, Copy)]
pub struct LoanDetails<'a> {
    pub loan: &'a Loan,
    pub book: &'a Book,
    pub member: &'a Member,
}

impl Deref for LoanDetails<'_> {
    type Target = Loan;

    fn deref(&self) -> &Self::Target {
        self.loan
    }
}

impl fmt::Display for LoanDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} borrowed \"{}\" on {} (Due: {})",
            self.member.name(),
            self.book.title(),
            self.loan.loaned_on(),
            self.loan.due_on()
        )?;
        if let Some(returned_on) = self.loan.returned_on() {
            write!(f, " - Returned on: {}", returned_on)?;
        }
        Ok(())
    }
}

/// 貸出ビュー（構造化出力用）
///
/// `LoanDetails`を所有データに平坦化したもの。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanView {
    pub loan_id: LoanId,
    pub book_id: BookId,
    pub book_title: String,
    pub member_id: MemberId,
    pub member_name: String,
    pub loaned_on: NaiveDate,
    pub due_on: NaiveDate,
    pub returned_on: Option<NaiveDate>,
    pub status: LoanStatus,
    pub overdue: bool,
}

/// 貸出ビューを構築する
///
/// 延滞は`today`時点で判定する（表示用の情報で、貸出規則には使わない）。
pub fn build_loan_view(details: &LoanDetails<'_>, today: NaiveDate) -> LoanView {
    LoanView {
        loan_id: details.loan_id(),
        book_id: details.book.id(),
        book_title: details.book.title().to_string(),
        member_id: details.member.id(),
        member_name: details.member.name().to_string(),
        loaned_on: details.loaned_on(),
        due_on: details.due_on(),
        returned_on: details.returned_on(),
        status: details.status(),
        overdue: details.is_overdue(today),
    }
}

/// 貸出サービス全体のスナップショット
///
/// 呼び出し側が自由に扱える所有データ。変更してもサービスには反映されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibrarySnapshot {
    pub books: Vec<Book>,
    pub members: Vec<Member>,
    pub loans: Vec<LoanView>,
}
