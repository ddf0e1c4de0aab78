mod nodes_tests;
