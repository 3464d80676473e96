//! Parser Module
//!
//! calamineを使用したワークブック読み込みの実装。
//! 授業一覧シートのヘッダー行と本文行を`SheetTable`として取り出します。

mod workbook;

pub(crate) use workbook::WorkbookParser;
