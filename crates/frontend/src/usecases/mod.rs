pub mod u501_booking_flow;
