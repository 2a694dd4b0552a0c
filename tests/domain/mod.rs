mod task_test;
