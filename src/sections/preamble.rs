//! RL-004: Static document header and footer.
//!
//! The header carries the document class, package set, page geometry and the
//! `\resume*` commands every section builder expands into.

/// Document class declaration; the checker requires it.
pub const DOCUMENT_CLASS: &str = "\\documentclass";
/// Content start marker.
pub const BEGIN_DOCUMENT: &str = "\\begin{document}";
/// Content end marker.
pub const END_DOCUMENT: &str = "\\end{document}";

/// Everything up to and including `\begin{document}`.
pub fn header() -> &'static str {
    HEADER
}

/// Closing marker.
pub fn footer() -> &'static str {
    FOOTER
}

const HEADER: &str = r"\documentclass[letterpaper,11pt]{article}

%---------- PACKAGES ----------
\usepackage{latexsym}
\usepackage[empty]{fullpage}
\usepackage{titlesec}
\usepackage{textcomp}
\usepackage[usenames,dvipsnames]{color}
\usepackage{times}
\usepackage{verbatim}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\usepackage{fancyhdr}
\usepackage[english]{babel}
\usepackage{tabularx}
\usepackage{hyphenat}

%---------- PAGE SETUP ----------
\pagestyle{fancy}
\fancyhf{} % clear all header and footer fields
\fancyfoot{}
\renewcommand{\headrulewidth}{0pt}
\renewcommand{\footrulewidth}{0pt}

\addtolength{\oddsidemargin}{-0.5in}
\addtolength{\evensidemargin}{-0.5in}
\addtolength{\textwidth}{1in}
\addtolength{\topmargin}{-.5in}
\addtolength{\textheight}{1.0in}

\urlstyle{same}
\raggedbottom
\raggedright
\setlength{\tabcolsep}{0in}

%---------- SECTION FORMATTING ----------
\titleformat{\section}{
  \vspace{-4pt}\scshape\raggedright\large
}{}{0em}{}[\color{black}\titlerule \vspace{-5pt}]

% machine readable / ATS parsable PDF
\pdfgentounicode=1

%---------- CUSTOM COMMANDS ----------
\newcommand{\resumeItem}[1]{
  \item \small{ #1 }
}

% company, location, position, date
\newcommand{\resumeSubheading}[4]{
  \vspace{-2pt}\item
    \begin{tabular*}{0.97\textwidth}[t]{l@{\extracolsep{\fill}}r}
      \textbf{#1} & #2 \\
      {\small #3} & {\small #4} \\
    \end{tabular*}\vspace{-7pt}
}

% university, location, degree, date
\newcommand{\resumeEducationHeading}[4]{
  \vspace{-2pt}\item
    \begin{tabular*}{0.97\textwidth}[t]{l@{\extracolsep{\fill}}r}
      \textbf{#1} & #2 \\
      {\small #3} & {\small #4} \\
    \end{tabular*}\vspace{-7pt}
}

% project name, date
\newcommand{\resumeProjectHeading}[2]{
    \vspace{-2pt}\item
    \begin{tabular*}{0.97\textwidth}{l@{\extracolsep{\fill}}r}
      \small#1 & #2 \\
    \end{tabular*}\vspace{-7pt}
}

\newcommand{\resumeSubHeadingListStart}{\begin{itemize}[leftmargin=0.15in, label={}]}
\newcommand{\resumeSubHeadingListEnd}{\end{itemize}}
\newcommand{\resumeItemListStart}{\begin{itemize}[leftmargin=*, itemsep=2pt, label=\textbullet]}
\newcommand{\resumeItemListEnd}{\end{itemize}\vspace{-5pt}}

%-------------------------------------------
\begin{document}

";

const FOOTER: &str = "%-------------------------------------------
\\end{document}
";
