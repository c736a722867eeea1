pub mod big_decimal;
pub mod days;
pub mod input;
pub mod parser_combinators;
