use thiserror::Error;

use crate::domain::{BookId, MemberId};

/// 貸出管理アプリケーション層のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LendingError {
    /// 会員が存在しない
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    /// 書籍が存在しない
    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    /// 貸出可能な在庫がない
    #[error("No copies available for book {0}")]
    NoCopiesAvailable(BookId),

    /// 書籍・会員の組に対する貸出中の記録がない
    #[error("No active loan found for book {book_id} and member {member_id}")]
    ActiveLoanNotFound { book_id: BookId, member_id: MemberId },

    /// 同じIDの書籍が登録済み
    #[error("Book {0} is already registered")]
    DuplicateBook(BookId),

    /// 同じIDの会員が登録済み
    #[error("Member {0} is already registered")]
    DuplicateMember(MemberId),

    /// サービス内部の整合性が崩れている
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LendingError>;
