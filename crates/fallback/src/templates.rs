//! Canned guidance blocks. Content mirrors what the university support desk
//! hands out; keep the markdown light so it reads fine in plain text too.

pub const GREETINGS: &[&str] = &[
  "Hi! I'm UNILORIN Student Support. I can help you with course registration, academic calendar, GPA calculations, and general university guidance. What would you like to know?",
  "As your UNILORIN academic assistant, I can help you with course-related queries, registration procedures, examination schedules, and campus resources. How can I assist you today?",
  "I'm designed to support UNILORIN students with academic guidance. Whether you need help with course selection, understanding university policies, or navigating campus resources, I'm here to help!",
];

pub const REGISTRATION_GUIDE: &str = "\
For course registration at UNILORIN:

1. **Prerequisites**: Ensure you've completed your course selection for the semester
2. **Access Portal**: Log into the student portal with your student ID and password
3. **Navigate**: Go to the course registration section
4. **Select Courses**: Choose your courses carefully, checking for prerequisites and restrictions
5. **Confirm**: Review your selections and submit your registration
6. **Confirmation**: Save your confirmation email for your records

**Important**: Complete registration early to secure your preferred courses. Contact the registrar's office if you encounter any issues.";

pub const GRADES_GUIDE: &str = "\
To check your GPA and results at UNILORIN:

1. **Student Portal**: Log into your student portal account
2. **Academic Records**: Navigate to the academic records or results section
3. **Select Semester**: Choose the semester you want to view
4. **View Results**: Your grades and GPA will be displayed

**GPA Calculation**: UNILORIN uses a 5.0 scale where A=5, B=4, C=3, D=2, F=0. Your CGPA is the cumulative average of all completed courses.

For official transcripts or grade disputes, contact the academic office.";

pub const CALENDAR_GUIDE: &str = "\
Important UNILORIN Academic Calendar Information:

**Key Periods to Remember**:
- Course registration typically opens at the beginning of each semester
- Add/Drop period usually lasts 2 weeks after registration
- Mid-semester exams occur around week 7-8
- Final exams are scheduled at the end of each semester

**Important Deadlines**:
- School fees payment deadlines
- Course registration deadlines
- Examination registration deadlines

**Recommendation**: Check the official UNILORIN academic calendar on the university website for exact dates, as they may vary by semester and academic year.";
