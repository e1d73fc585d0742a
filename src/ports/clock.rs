use chrono::NaiveDate;

/// 時計ポート
///
/// 貸出日・返却日に使う「今日」を供給する。
/// 貸出サービスは壁時計に直接触れず、このポート経由で日付を得る。
pub trait Clock: Send + Sync {
    /// 今日の日付
    fn today(&self) -> NaiveDate;
}
