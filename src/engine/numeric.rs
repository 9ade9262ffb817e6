// ==========================================
// 服装 FOB 成本核算 - 数值工具
// ==========================================
// 除法保护: 除数 <= 0 或结果非有限时返回 0, 不向下游传播 NaN/Inf
// ==========================================

/// 每打件数
pub const PIECES_PER_DOZEN: f64 = 12.0;

/// 四舍五入到 2 位小数 (金额、汇总量)
pub fn round2(value: f64) -> f64 {
    round_to(value, 100.0)
}

/// 四舍五入到 4 位小数 (用料)
pub fn round4(value: f64) -> f64 {
    round_to(value, 10_000.0)
}

fn round_to(value: f64, scale: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * scale).round() / scale
}

/// 受保护的除法
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    let result = numerator / denominator;
    if result.is_finite() {
        result
    } else {
        0.0
    }
}

/// part 占 base 的百分比, base <= 0 时为 0
pub fn percent_of(part: f64, base: f64) -> f64 {
    safe_div(part, base) * 100.0
}

/// 百分比系数: 5 -> 1.05
pub fn pct_factor(percent: f64) -> f64 {
    1.0 + percent / 100.0
}
