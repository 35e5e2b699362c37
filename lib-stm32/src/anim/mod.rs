pub mod led_bar;
