mod api_tests;
mod landing_tests;
mod predict_tests;
mod static_tests;
