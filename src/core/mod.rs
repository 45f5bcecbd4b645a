pub mod calculator;
pub mod char_util;
pub mod label;
pub mod recursive_segmenter;
pub mod segmentor;
pub mod stack_segmenter;
