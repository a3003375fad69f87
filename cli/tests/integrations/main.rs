mod calc;
mod commands;
mod history;
