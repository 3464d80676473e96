//! Schedule Module
//!
//! 「曜時限・教室」セルの解析を提供するモジュール。
//! 全角・半角が混在した手書きの時間割文字列を、(曜日, 時限, 教室, 備考) の
//! レコード列に分解します。
//!
//! 各行は 特別ワード → 曜日・時限 → 教室 の優先順で分類され、
//! 行をまたぐ状態（未確定の曜日・時限、備考）は`ParseState`で明示的に保持します。

mod cell;
mod classify;
mod day_period;
mod normalize;
mod room;
mod special;

pub use cell::{parse_schedule_cell, parse_schedule_text};
pub use normalize::normalize_width;
