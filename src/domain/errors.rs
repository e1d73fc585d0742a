/// 貸出（書籍側）のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowBookError {
    /// 貸出可能な在庫がない
    NoCopiesAvailable,
}

/// 返却（書籍側）のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GiveBackError {
    /// 全冊が既に手元にある（所蔵冊数を超える返却）
    AllCopiesPresent,
}

/// 返却記録のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkReturnedError {
    /// 既に返却済み
    AlreadyReturned,
}
