use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::application::lending::LendingService;
use crate::domain::{BookId, MemberId};

const MENU: &str = "\n=== Library Menu ===
1. List Books
2. Borrow Book
3. Return Book
4. View Loans
5. List Members
6. Export JSON
7. Exit";

/// メニューの選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    ListBooks,
    BorrowBook,
    ReturnBook,
    ViewLoans,
    ListMembers,
    ExportJson,
    Exit,
}

impl FromStr for MenuCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuCommand::ListBooks),
            "2" => Ok(MenuCommand::BorrowBook),
            "3" => Ok(MenuCommand::ReturnBook),
            "4" => Ok(MenuCommand::ViewLoans),
            "5" => Ok(MenuCommand::ListMembers),
            "6" => Ok(MenuCommand::ExportJson),
            "7" => Ok(MenuCommand::Exit),
            other => Err(format!("Invalid menu option: {}", other)),
        }
    }
}

/// 対話メニュー
///
/// 入出力を差し替えられるよう`BufRead`/`Write`に対して汎用化している。
/// ドメインの状態は持たず、すべて`LendingService`に委譲する。
pub struct Console<'a, R, W> {
    service: &'a mut LendingService,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(service: &'a mut LendingService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Exitが選ばれるか入力が尽きるまでメニューを繰り返す
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Choose option: ")? else {
                writeln!(self.output, "Exiting...")?;
                return Ok(());
            };

            match line.parse::<MenuCommand>() {
                Ok(MenuCommand::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                Ok(command) => {
                    if !self.handle(command)? {
                        writeln!(self.output, "Exiting...")?;
                        return Ok(());
                    }
                }
                Err(_) => writeln!(self.output, "Invalid option.")?,
            }
        }
    }

    /// 1コマンドを処理する。入力が尽きた場合は`false`
    fn handle(&mut self, command: MenuCommand) -> io::Result<bool> {
        match command {
            MenuCommand::ListBooks => {
                for book in self.service.list_books() {
                    writeln!(self.output, "{}", book)?;
                }
            }
            MenuCommand::ListMembers => {
                for member in self.service.list_members() {
                    writeln!(self.output, "{}", member)?;
                }
            }
            MenuCommand::ViewLoans => {
                let loans = self.service.list_loans();
                if loans.is_empty() {
                    writeln!(self.output, "No loans yet.")?;
                }
                for loan in loans {
                    writeln!(self.output, "{}", loan)?;
                }
            }
            MenuCommand::BorrowBook => {
                let Some(ids) = self.read_ids()? else {
                    return Ok(false);
                };
                if let Some((member_id, book_id)) = ids {
                    match self.service.borrow(member_id, book_id) {
                        Ok(_) => writeln!(self.output, "Book borrowed successfully.")?,
                        Err(err) => writeln!(self.output, "Error: {}", err)?,
                    }
                }
            }
            MenuCommand::ReturnBook => {
                let Some(ids) = self.read_ids()? else {
                    return Ok(false);
                };
                if let Some((member_id, book_id)) = ids {
                    match self.service.return_loan(book_id, member_id) {
                        Ok(_) => writeln!(self.output, "Book returned successfully.")?,
                        Err(err) => writeln!(self.output, "Error: {}", err)?,
                    }
                }
            }
            MenuCommand::ExportJson => {
                let json = serde_json::to_string_pretty(&self.service.snapshot())
                    .map_err(io::Error::other)?;
                writeln!(self.output, "{}", json)?;
            }
            MenuCommand::Exit => return Ok(false),
        }
        Ok(true)
    }

    /// 会員IDと書籍IDを順に読む
    ///
    /// 入力が尽きた場合は`None`、数値でない場合は`Some(None)`
    fn read_ids(&mut self) -> io::Result<Option<Option<(MemberId, BookId)>>> {
        let Some(member) = self.prompt("Enter Member ID: ")? else {
            return Ok(None);
        };
        let Some(book) = self.prompt("Enter Book ID: ")? else {
            return Ok(None);
        };

        match (member.parse::<u32>(), book.parse::<u32>()) {
            (Ok(member_id), Ok(book_id)) => {
                Ok(Some(Some((MemberId::new(member_id), BookId::new(book_id)))))
            }
            _ => {
                writeln!(self.output, "Invalid input.")?;
                Ok(Some(None))
            }
        }
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
