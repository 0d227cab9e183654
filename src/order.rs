//! 占位符替换顺序：决定多个占位符同时匹配同一位置时谁优先。

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

/// 替换前对参数表的排序方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// 按字面量文本长度升序（兼容旧行为，默认）。
    ///
    /// 注意：它按**值**的长度排序，而不是占位符名字的长度，所以 `:id` 仍可能吃掉
    /// `:identifier` 的前缀（当 `id` 的字面量更短时）。
    #[default]
    ValueLength,
    /// 按占位符名字长度降序：长名字先匹配，`:identifier` 不会被 `:id` 截断。
    LongestName,
}

// 只有两种顺序，`true` 表示 `LongestName`。
static LONGEST_NAME_BY_DEFAULT: AtomicBool = AtomicBool::new(false);
static DEFAULT_SORT_ORDER_LOCK: Mutex<()> = Mutex::new(());

impl From<bool> for SortOrder {
    fn from(longest_name: bool) -> Self {
        if longest_name {
            Self::LongestName
        } else {
            Self::ValueLength
        }
    }
}

/// 当前全局默认的替换顺序。
pub fn default_sort_order() -> SortOrder {
    LONGEST_NAME_BY_DEFAULT.load(Ordering::Relaxed).into()
}

/// 设置全局默认替换顺序，返回旧值。
pub fn set_default_sort_order(order: SortOrder) -> SortOrder {
    let longest_name = order == SortOrder::LongestName;
    LONGEST_NAME_BY_DEFAULT
        .swap(longest_name, Ordering::Relaxed)
        .into()
}

/// 修改全局默认顺序的 RAII guard（持有全局锁，避免并行测试互相干扰）。
pub struct DefaultSortOrderGuard {
    _lock: MutexGuard<'static, ()>,
    old: SortOrder,
}

impl Drop for DefaultSortOrderGuard {
    fn drop(&mut self) {
        set_default_sort_order(self.old);
    }
}

/// 在一个作用域内临时设置默认顺序，退出作用域后自动恢复。
pub fn set_default_sort_order_scoped(order: SortOrder) -> DefaultSortOrderGuard {
    let lock = DEFAULT_SORT_ORDER_LOCK
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    let old = set_default_sort_order(order);
    DefaultSortOrderGuard { _lock: lock, old }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ValueLength => "value-length",
            Self::LongestName => "longest-name",
        };
        f.write_str(s)
    }
}
