//! Static listing corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of listing lines with their
//! terminators already stripped, as a listing-retrieval layer would hand them
//! over.

/// Enterprise Unix entry lines.
pub const CORPUS_ENTERPRISE: &[&str] = &[
    "-C--E-----FTP B QUA1I1      18128       41 Aug 12 13:56 QUADTEST",
    "-C--E-----FTP A QUA1I1      18128       41 Aug 12 13:56 QUADTEST2",
    "-C--E-----FTP B QUA1I1      18128    98304 Mar 05 09:10 PAYROLL.DAT",
    "-C--E-----FTP A USER01      20001     1024 Dec 31 2019 ARCHIVE.ZIP",
    "---------EFTP B QUA1I1      18128        7 Jan 1 00:00 NEWYEAR",
    "-C--E-----FTP B QUA1I1      18128       41 Jun 30 23:59 LATE -> ELSEWHERE",
];

/// Classic `ls -l` entry lines.
pub const CORPUS_UNIX: &[&str] = &[
    "drwxr-xr-x   2 alice staff      4096 Jan  1  2020 docs",
    "-rw-r--r--   1 alice staff       120 Mar  5 09:10 notes.txt",
    "lrwxrwxrwx   1 alice staff        11 Aug 12 13:56 current -> releases/42",
    "crw-rw----   1 root  tty       4,   1 Jun 10 08:00 tty1",
    "-rw-r--r--+  1 bob   users  18446744 Nov 30  2023 report final.pdf",
    "prw-------   1 root  root           0 Feb 29  2024 fifo",
];

/// Lines that must never parse as entries in any convention.
pub const CORPUS_NOT_ENTRIES: &[&str] = &[
    "",
    "total 42",
    "   ",
    "226 Transfer complete.",
    "drwxr-xr-x",
    "-C--E-----FTP B QUA1I1 18128 41 Aug 12 13:56",
    "-C--E-----FTP B QUA1I1 18128 41 Aug 32 13:56 BADDAY",
    "-C--E-----FTP B QUA1I1 18128 41 Aug 12 24:00 BADHOUR",
    "-C--E-----FTP B QUA1I1 18128 41 August 12 2023 LONGMONTH",
    "-rw-r--r-- 1 alice staff 120 Mar  5 09:10",
];

/// A whole enterprise listing as received from a server, header included.
pub const ENTERPRISE_LISTING: &str = "total 3\r\n\
-C--E-----FTP B QUA1I1      18128       41 Aug 12 13:56 QUADTEST\r\n\
-C--E-----FTP A USER01      20001     1024 Dec 31 2019 ARCHIVE.ZIP\r\n\
\r\n\
-C--E-----FTP B QUA1I1      18128    98304 Mar 05 09:10 PAYROLL.DAT\r\n";
