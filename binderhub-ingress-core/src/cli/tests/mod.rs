mod init_tests;
