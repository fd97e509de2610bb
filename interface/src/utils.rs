#[macro_export]
macro_rules! true_false_color {
    ($a: expr) => {
        if $a {
            $crate::consts::GREEN_COL
        } else {
            $crate::consts::RED_COL
        }
    };
}

pub fn bit_str(bit: bool) -> &'static str {
    if bit {
        "1"
    } else {
        "0"
    }
}

/// Column labels: `I0 I1 ... | O0 O1 ...`.
pub fn column_labels(prefix: char, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}{}", prefix, i)).collect()
}
