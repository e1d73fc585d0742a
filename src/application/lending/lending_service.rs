use std::collections::HashMap;
use std::sync::Arc;

use crate::adapters::system::SystemClock;
use crate::domain::{
    self, Book, BookId, BorrowBookError, GiveBackError, Loan, MarkReturnedError, Member, MemberId,
};
use crate::ports::Clock;

use super::errors::{LendingError, Result};
use super::views::{LibrarySnapshot, LoanDetails, build_loan_view};

/// 貸出サービス - 書籍・会員・貸出記録を所有する集約ルート
///
/// 書籍の在庫数と貸出記録の整合性はこのサービスだけが変更する。
/// 各書籍について常に次が成り立つ：
///
/// `copies_available + 貸出中の記録数 == total_copies`
///
/// 変更系の操作は`&mut self`を取るため、1回の貸出・返却は
/// 途中の状態を他から観測されることなく完了する。
pub struct LendingService {
    clock: Arc<dyn Clock>,
    books: Vec<Book>,
    book_index: HashMap<BookId, usize>,
    members: Vec<Member>,
    member_index: HashMap<MemberId, usize>,
    loans: Vec<Loan>,
}

impl LendingService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            books: Vec::new(),
            book_index: HashMap::new(),
            members: Vec::new(),
            member_index: HashMap::new(),
            loans: Vec::new(),
        }
    }

    /// 蔵書を登録する
    ///
    /// # エラー
    /// 同じIDの書籍が登録済みの場合は`DuplicateBook`（既存の登録は変更しない）
    pub fn register_book(&mut self, book: Book) -> Result<()> {
        let book_id = book.id();
        if self.book_index.contains_key(&book_id) {
            return Err(rejected("register_book", LendingError::DuplicateBook(book_id)));
        }

        tracing::debug!(%book_id, title = book.title(), copies = book.total_copies(), "book registered");
        self.book_index.insert(book_id, self.books.len());
        self.books.push(book);
        Ok(())
    }

    /// 会員を登録する
    ///
    /// # エラー
    /// 同じIDの会員が登録済みの場合は`DuplicateMember`（既存の登録は変更しない）
    pub fn register_member(&mut self, member: Member) -> Result<()> {
        let member_id = member.id();
        if self.member_index.contains_key(&member_id) {
            return Err(rejected(
                "register_member",
                LendingError::DuplicateMember(member_id),
            ));
        }

        tracing::debug!(%member_id, name = member.name(), "member registered");
        self.member_index.insert(member_id, self.members.len());
        self.members.push(member);
        Ok(())
    }

    /// 登録順の蔵書一覧
    pub fn list_books(&self) -> &[Book] {
        &self.books
    }

    /// 登録順の会員一覧
    pub fn list_members(&self) -> &[Member] {
        &self.members
    }

    /// 貸出順の貸出記録（書籍・会員と結合済み）
    pub fn list_loans(&self) -> Vec<LoanDetails<'_>> {
        self.loans
            .iter()
            .filter_map(|loan| self.details(loan))
            .collect()
    }

    /// 貸出順の貸出記録
    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn active_loans(&self) -> impl Iterator<Item = &Loan> {
        self.loans.iter().filter(|loan| loan.is_active())
    }

    pub fn book(&self, book_id: BookId) -> Option<&Book> {
        self.book_index.get(&book_id).map(|&idx| &self.books[idx])
    }

    pub fn member(&self, member_id: MemberId) -> Option<&Member> {
        self.member_index
            .get(&member_id)
            .map(|&idx| &self.members[idx])
    }

    /// 書籍を貸し出す
    ///
    /// ビジネスルール：
    /// - 会員が存在すること
    /// - 書籍が存在すること
    /// - 書籍に貸出可能な在庫があること
    /// - 貸出日は今日、返却期限は14日後
    ///
    /// 在庫の減算が成功した後にのみ貸出記録を作成する。
    /// 失敗時はどの状態も変更しない。
    pub fn borrow(&mut self, member_id: MemberId, book_id: BookId) -> Result<&Loan> {
        // 1. 会員の存在確認
        if !self.member_index.contains_key(&member_id) {
            return Err(rejected("borrow", LendingError::MemberNotFound(member_id)));
        }

        // 2. 書籍の存在確認
        let Some(&book_idx) = self.book_index.get(&book_id) else {
            return Err(rejected("borrow", LendingError::BookNotFound(book_id)));
        };

        // 3. 在庫を1冊減らす
        if let Err(err) = self.books[book_idx].borrow() {
            let err = match err {
                BorrowBookError::NoCopiesAvailable => LendingError::NoCopiesAvailable(book_id),
            };
            return Err(rejected("borrow", err));
        }

        // 4. 貸出記録を作成
        let loan = domain::loan::loan_book(book_id, member_id, self.clock.today());
        tracing::info!(
            loan_id = %loan.loan_id(),
            %member_id,
            %book_id,
            due_on = %loan.due_on(),
            copies_available = self.books[book_idx].copies_available(),
            "book borrowed"
        );

        let loan_idx = self.loans.len();
        self.loans.push(loan);
        Ok(&self.loans[loan_idx])
    }

    /// 書籍を返却する
    ///
    /// ビジネスルール：
    /// - 書籍・会員の組に一致する貸出中の記録があること（最初に一致したもの）
    /// - 返却日は今日
    /// - 書籍の在庫を1冊戻す
    ///
    /// 変更前にすべての検証を済ませるため、返却記録と在庫の更新は
    /// 両方とも適用されるか、どちらも適用されない。
    pub fn return_loan(&mut self, book_id: BookId, member_id: MemberId) -> Result<&Loan> {
        // 1. 貸出中の記録を検索
        let Some(loan_idx) = self
            .loans
            .iter()
            .position(|loan| loan.is_active() && loan.matches(book_id, member_id))
        else {
            return Err(rejected(
                "return_loan",
                LendingError::ActiveLoanNotFound { book_id, member_id },
            ));
        };

        // 2. 在庫を戻せることを確認（貸出中の記録があれば必ず1冊以上貸出中）
        let book_idx = match self.book_index.get(&book_id) {
            Some(&idx) if self.books[idx].copies_on_loan() > 0 => idx,
            Some(_) => {
                return Err(rejected(
                    "return_loan",
                    LendingError::InvariantViolation(format!(
                        "book {} has an active loan but no copies on loan",
                        book_id
                    )),
                ));
            }
            None => {
                return Err(rejected(
                    "return_loan",
                    LendingError::InvariantViolation(format!(
                        "loan references unregistered book {}",
                        book_id
                    )),
                ));
            }
        };

        // 3. 在庫を1冊戻す（上で貸出中の冊数 > 0 を確認済み）
        let today = self.clock.today();
        self.books[book_idx]
            .give_back()
            .map_err(|GiveBackError::AllCopiesPresent| {
                LendingError::InvariantViolation(format!(
                    "book {} already has all copies present",
                    book_id
                ))
            })?;

        // 4. 返却日を記録する
        // 記録は貸出中のものを選んでいるため失敗しない。失敗した場合は手順3を取り消し、
        // 在庫と返却記録のどちらも変更しない。検証を追加する場合は手順3より前に置くこと。
        if let Err(MarkReturnedError::AlreadyReturned) = self.loans[loan_idx].mark_returned(today) {
            let _ = self.books[book_idx].borrow();
            return Err(rejected(
                "return_loan",
                LendingError::InvariantViolation("selected loan was already returned".to_string()),
            ));
        }

        let loan = &self.loans[loan_idx];
        tracing::info!(
            loan_id = %loan.loan_id(),
            %member_id,
            %book_id,
            returned_on = %today,
            copies_available = self.books[book_idx].copies_available(),
            "book returned"
        );
        Ok(loan)
    }

    /// 現在の状態を所有データとして取り出す
    pub fn snapshot(&self) -> LibrarySnapshot {
        let today = self.clock.today();
        LibrarySnapshot {
            books: self.books.clone(),
            members: self.members.clone(),
            loans: self
                .list_loans()
                .iter()
                .map(|details| build_loan_view(details, today))
                .collect(),
        }
    }

    fn details<'a>(&'a self, loan: &'a Loan) -> Option<LoanDetails<'a>> {
        Some(LoanDetails {
            loan,
            book: self.book(loan.book_id())?,
            member: self.member(loan.member_id())?,
        })
    }
}

impl Default for LendingService {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock::new()))
    }
}

/// 拒否した操作をログに残してエラーをそのまま返す
fn rejected(operation: &'static str, err: LendingError) -> LendingError {
    tracing::warn!(operation, error = %err, "operation rejected");
    err
}
