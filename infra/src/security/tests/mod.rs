mod jwt_token_provider_tests;
