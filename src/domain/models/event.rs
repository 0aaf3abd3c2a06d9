use tui_textarea::Input;

use super::LoginProfile;
use super::MatchResult;
use super::Outcome;
use super::RequestId;

#[derive(Debug)]
pub enum Event {
    ExtractResponse(RequestId, Outcome<Vec<String>>),
    LoginResponse(RequestId, Outcome<LoginProfile>),
    MatchesResponse(RequestId, Outcome<Vec<MatchResult>>),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLF(),
    KeyboardCTRLL(),
    KeyboardCTRLX(),
    /// Removes the selected food when the input is empty, otherwise edits
    /// the input.
    KeyboardDelete(Input),
    KeyboardEnter(),
    KeyboardPaste(String),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
