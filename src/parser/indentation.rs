/// 计算一行的缩进级别，并返回去掉行首缩进后的剩余文本
///
/// 行首的制表符和空格分别计数，遇到第一个非空白字符即停止；
/// 空格按 `spaces_per_tab` 折算成缩进级别(整除)。剩余文本中的空白原样保留。
pub fn analyze(line: &str, spaces_per_tab: usize) -> (usize, &str) {
    let mut tabs = 0;
    let mut spaces = 0;
    for c in line.chars() {
        match c {
            '\t' => tabs += 1,
            ' ' => spaces += 1,
            _ => break,
        }
    }

    let residual = &line[tabs + spaces..];
    (tabs + spaces / spaces_per_tab.max(1), residual)
}
