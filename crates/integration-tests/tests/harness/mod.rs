pub mod mock_gemini;
