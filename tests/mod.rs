mod common;

mod gemini_tests;
