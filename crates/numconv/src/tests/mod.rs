mod format_int;
