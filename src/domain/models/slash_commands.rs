#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .trim()
            .split(' ')
            .filter(|e| return !e.is_empty())
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        if args.is_empty() {
            return None;
        }

        let prefix = args[0].to_string();
        args.remove(0);

        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.is_quit() || cmd.is_logout() || cmd.is_calculate() || cmd.is_describe() {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_logout(&self) -> bool {
        return ["/logout", "/switch"].contains(&self.command.as_str());
    }

    pub fn is_calculate(&self) -> bool {
        return ["/m", "/match", "/matches"].contains(&self.command.as_str());
    }

    pub fn is_describe(&self) -> bool {
        return ["/d", "/describe"].contains(&self.command.as_str());
    }

    pub fn text(&self) -> String {
        return self.args.join(" ");
    }

    /// `/describe` needs something to describe.
    pub fn is_complete(&self) -> bool {
        if self.is_describe() {
            return !self.args.is_empty();
        }

        return true;
    }
}
