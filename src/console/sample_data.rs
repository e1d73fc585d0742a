use crate::application::lending::{LendingService, Result};
use crate::domain::{Book, BookId, Member, MemberId};

/// サンプルの書籍と会員を登録する
pub fn seed(service: &mut LendingService) -> Result<()> {
    service.register_book(Book::new(BookId::new(1), "Java Programming", "John Doe", 3))?;
    service.register_book(Book::new(BookId::new(2), "Design Patterns", "Erich Gamma", 2))?;

    service.register_member(Member::new(MemberId::new(1), "Alice", "alice@example.com"))?;
    service.register_member(Member::new(MemberId::new(2), "Bob", "bob@example.com"))?;

    tracing::info!(
        books = service.list_books().len(),
        members = service.list_members().len(),
        "sample data loaded"
    );
    Ok(())
}
