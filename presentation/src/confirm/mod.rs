pub mod console_prompt;
