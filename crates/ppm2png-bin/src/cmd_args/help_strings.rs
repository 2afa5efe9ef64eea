pub static STRICT_HELP: &str = "Reject inputs the default mode tolerates

In strict mode the following are errors instead of being accepted:
 - a width or height that is zero or negative
 - a missing max colour value, or one outside 1..=255
 - fewer pixel lines than width * height";

pub static PROBE_HELP: &str = "Print the PPM header as JSON and exit

Only the first three lines of the file are read, no PNG is written
and the png-filename argument may be left out.";
