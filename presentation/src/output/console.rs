//! Console output formatter for game screens

use colored::Colorize;
use undercover_domain::{PlayerCount, RevealSummary};

/// Formats every screen of the game for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Title banner shown at start-up
    pub fn title() -> String {
        Self::header("文字狼人杀")
    }

    pub fn player_count_prompt(default: PlayerCount) -> String {
        format!("请输入参与玩家人数 (>=2) [{}]：", default)
    }

    /// Message for a rejected player count. `raw` is the user's input.
    pub fn invalid_player_count(raw: &str) -> String {
        let message = if raw.trim().parse::<usize>().is_ok() {
            "玩家人数必须大于等于2"
        } else {
            "请输入正确的数字"
        };
        format!("{} {}", "错误:".red().bold(), message)
    }

    /// Intro screen: names the player, hides the word
    pub fn intro(player_number: usize) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n\n", format!("玩家 {}", player_number).bold()));
        output.push_str(&format!("你是第 {} 个玩家\n\n", player_number));
        output.push_str(&format!("{}\n", "请按回车查看你的词".dimmed()));
        output
    }

    /// Word screen for one player
    pub fn word(player_number: usize, word: &str, is_last_player: bool) -> String {
        let next = if is_last_player {
            "按回车查看结果"
        } else {
            "记住后按回车，交给下一位"
        };

        let mut output = String::new();
        output.push_str(&format!("{}\n\n", format!("玩家 {}", player_number).bold()));
        output.push_str("你的词是：\n\n");
        output.push_str(&format!("    {}\n\n", word.blue().bold()));
        output.push_str(&format!("{}\n", next.dimmed()));
        output
    }

    /// Final reveal screen
    pub fn summary(summary: &RevealSummary) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("结果公布"));
        output.push('\n');

        output.push_str(&format!(
            "{}\n",
            format!("卧底是第 {} 个玩家", summary.undercover_number())
                .yellow()
                .bold()
        ));
        output.push_str(&format!(
            "多数派词：{}    卧底词：{}\n\n",
            summary.pair.majority, summary.pair.minority
        ));

        for (index, word) in summary.player_words.iter().enumerate() {
            let line = format!("玩家 {}: {}", index + 1, word);
            if index == summary.undercover_index {
                output.push_str(&format!("  {}\n", line.red()));
            } else {
                output.push_str(&format!("  {}\n", line));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the reveal summary as JSON
    pub fn summary_json(summary: &RevealSummary) -> String {
        serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn menu(remaining_pairs: usize) -> String {
        format!(
            "[n] 下一局游戏  [r] 重新设定人数  [q] 退出   {}\n> ",
            format!("(词库剩余 {} 组)", remaining_pairs).dimmed()
        )
    }

    pub fn unknown_choice(choice: &str) -> String {
        format!("未知选项: {}（请输入 n / r / q）", choice)
    }

    /// Shown when the pool has no pairs left
    pub fn exhausted(active: &str, used: &str) -> String {
        format!(
            "{} 词库已使用完，请更新 {} 或从 {} 移回词条。",
            "提示:".yellow().bold(),
            active,
            used
        )
    }

    pub fn error(message: &str) -> String {
        format!("{} {}", "错误:".red().bold(), message)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(40);
        format!("{}\n{:^36}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(40).cyan())
    }
}
