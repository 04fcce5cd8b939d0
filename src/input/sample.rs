//! Built-in sample resume used by the `demo` command

pub const SAMPLE_RESUME: &str = concat!(
    "Tanmya Potdar\n",
    "Email: 2021mcb1252@iitrpr.ac.in\n",
    "Phone: 6362127519\n",
    "LinkedIn: linkedin.com/in/johndoe\n",
    "\n",
    "PROFESSIONAL SUMMARY\n",
    "Experienced software developer with expertise in C++ and Python.\n",
    "\n",
    "EDUCATION\n",
    "•Bachelor of Science in Computer Science from college IIT Ropar (2014 - 2018)\n",
    "\n",
    "SKILLS\n",
    "C++, PythonL\n",
    "\n",
    "PROJECTS\n",
    "• Weather Application Apr. 2023",
    "Vue|Tailwind CSS Github",
    "– Created a weather application which tells about the weather and all the related details for any city using Vue and Tailwind",
    "CSS. Used Mapbox API for weather information retrieval and location tracking",
    "– Functionalities include tracking a city, accessing weather data for the next 10 days, add/delete city, etc.",
);

pub const SAMPLE_REQUIRED_SKILLS: &[&str] = &["C++", "Python", "SQL", "Java"];

pub const SAMPLE_REQUIRE_GPA: bool = true;

pub fn sample_required_skills() -> Vec<String> {
    SAMPLE_REQUIRED_SKILLS.iter().map(|s| s.to_string()).collect()
}
