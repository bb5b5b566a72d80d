use actix::Message;

/// One line typed into the filter controls. Answers whether the session
/// should keep reading input.
#[derive(Message, Debug, Clone)]
#[rtype(result = "bool")]
pub struct UserInput {
    pub line: String,
}

/// Tears the map widget down. The adapter stops right after.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct CloseMap;
