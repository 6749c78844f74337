//! Fixed console text: banners and confirmation messages.

use crate::tasks::Task;

/// Horizontal rule framing the banners.
pub const DIVIDER: &str = "-----------------------------------";

#[must_use]
pub fn welcome() -> String {
    format!("{DIVIDER}\nHello! I'm Cro!\nWhat can I do for you?\n{DIVIDER}")
}

#[must_use]
pub fn farewell() -> String {
    format!("{DIVIDER}\nBye. Hope to see you again soon!\n{DIVIDER}")
}

fn count_line(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("Now you have {count} {noun} in the list.")
}

#[must_use]
pub fn added(task: &Task, count: usize) -> String {
    format!("Got it. I've added this task:\n  {task}\n{}", count_line(count))
}

#[must_use]
pub fn marked(task: &Task) -> String {
    format!("Nice! I've marked this task as done:\n  {task}")
}

#[must_use]
pub fn unmarked(task: &Task) -> String {
    format!("OK, I've marked this task as not done yet:\n  {task}")
}

#[must_use]
pub fn removed(task: &Task, count: usize) -> String {
    format!("Noted. I've removed this task:\n  {task}\n{}", count_line(count))
}
