use std::fmt;

use serde::Serialize;

use super::{BookId, BorrowBookError, GiveBackError};

/// 書籍 - 蔵書1タイトル分の在庫を管理する
///
/// 不変条件：
/// - `copies_available` は負にならない（u32で表現）
/// - `copies_available <= total_copies`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    copies_available: u32,
    total_copies: u32,
}

impl Book {
    /// 新規登録（所蔵冊数すべてが貸出可能な状態）
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        total_copies: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            copies_available: total_copies,
            total_copies,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn copies_available(&self) -> u32 {
        self.copies_available
    }

    pub fn total_copies(&self) -> u32 {
        self.total_copies
    }

    /// 貸出中の冊数（在庫が所蔵冊数を超えている場合は0）
    pub fn copies_on_loan(&self) -> u32 {
        self.total_copies.saturating_sub(self.copies_available)
    }

    /// 1冊貸し出す
    ///
    /// # エラー
    /// 在庫が0の場合は`BorrowBookError::NoCopiesAvailable`を返し、状態は変わらない
    pub fn borrow(&mut self) -> Result<(), BorrowBookError> {
        if self.copies_available == 0 {
            return Err(BorrowBookError::NoCopiesAvailable);
        }
        self.copies_available -= 1;
        Ok(())
    }

    /// 1冊返却を受け付ける
    ///
    /// # エラー
    /// 全冊が手元にある場合は`GiveBackError::AllCopiesPresent`を返し、状態は変わらない
    pub fn give_back(&mut self) -> Result<(), GiveBackError> {
        if self.copies_available >= self.total_copies {
            return Err(GiveBackError::AllCopiesPresent);
        }
        self.copies_available += 1;
        Ok(())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} by {} (Available: {})",
            self.id, self.title, self.author, self.copies_available
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book(copies: u32) -> Book {
        Book::new(BookId::new(1), "Java Programming", "John Doe", copies)
    }

    #[test]
    fn test_new_book_has_all_copies_available() {
        let book = sample_book(3);
        assert_eq!(book.copies_available(), 3);
        assert_eq!(book.total_copies(), 3);
        assert_eq!(book.copies_on_loan(), 0);
    }

    #[test]
    fn test_borrow_decrements_available_copies() {
        let mut book = sample_book(3);
        assert!(book.borrow().is_ok());
        assert_eq!(book.copies_available(), 2);
        assert_eq!(book.copies_on_loan(), 1);
    }

    #[test]
    fn test_borrow_fails_when_no_copies_left() {
        let mut book = sample_book(1);
        book.borrow().unwrap();

        let result = book.borrow();
        assert_eq!(result, Err(BorrowBookError::NoCopiesAvailable));
        assert_eq!(book.copies_available(), 0);
    }

    #[test]
    fn test_borrow_fails_for_book_registered_without_copies() {
        let mut book = sample_book(0);
        assert_eq!(book.borrow(), Err(BorrowBookError::NoCopiesAvailable));
        assert_eq!(book.copies_available(), 0);
    }

    #[test]
    fn test_give_back_restores_copy() {
        let mut book = sample_book(2);
        book.borrow().unwrap();
        assert!(book.give_back().is_ok());
        assert_eq!(book.copies_available(), 2);
    }

    // 所蔵冊数を超える返却は受け付けない
    #[test]
    fn test_give_back_fails_when_all_copies_present() {
        let mut book = sample_book(2);
        let result = book.give_back();
        assert_eq!(result, Err(GiveBackError::AllCopiesPresent));
        assert_eq!(book.copies_available(), 2);
    }

    // 在庫が所蔵冊数を上回る壊れた状態でも、貸出中冊数は0で返却は拒否される
    #[test]
    fn test_copies_on_loan_does_not_underflow_when_counter_exceeds_total() {
        let mut book = Book {
            copies_available: 5,
            total_copies: 2,
            ..sample_book(2)
        };

        assert_eq!(book.copies_on_loan(), 0);
        assert_eq!(book.give_back(), Err(GiveBackError::AllCopiesPresent));
        assert_eq!(book.copies_available(), 5);
    }

    #[test]
    fn test_display_format() {
        let mut book = sample_book(3);
        book.borrow().unwrap();
        assert_eq!(
            book.to_string(),
            "1 - Java Programming by John Doe (Available: 2)"
        );
    }
}
