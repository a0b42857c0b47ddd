//! State and union-territory dataset: climate, rainfall, major crops,
//! common soil types, and district lists for all 31 covered regions.

use std::collections::BTreeMap;

use super::{list, StateRecord};

fn record(
    climate: &str,
    major_crops: &[&str],
    soil_types: &[&str],
    rainfall: &str,
    districts: &[&str],
) -> StateRecord {
    StateRecord {
        climate: climate.to_string(),
        major_crops: list(major_crops),
        soil_types: list(soil_types),
        rainfall: rainfall.to_string(),
        districts: list(districts),
    }
}

pub(super) fn build() -> BTreeMap<String, StateRecord> {
    let mut states = BTreeMap::new();

    states.insert(
        "Andhra Pradesh".to_string(),
        record(
            "Tropical, hot and humid",
            &["rice", "cotton", "sugarcane", "tobacco", "pulses"],
            &["red", "black", "alluvial"],
            "900-1200mm",
            &[
                "Anantapur", "Chittoor", "East Godavari", "Guntur", "Krishna", "Kurnool",
                "Prakasam", "Srikakulam", "Visakhapatnam", "Vizianagaram", "West Godavari",
                "YSR Kadapa", "Nellore",
            ],
        ),
    );

    states.insert(
        "Arunachal Pradesh".to_string(),
        record(
            "Subtropical to alpine",
            &["rice", "maize", "millet", "wheat", "pulses"],
            &["alluvial", "red"],
            "2000-4000mm",
            &[
                "Tawang", "West Kameng", "East Kameng", "Papum Pare", "Kurung Kumey",
                "Kra Daadi", "Lower Subansiri", "Upper Subansiri", "West Siang", "East Siang",
                "Siang", "Upper Siang", "Lower Siang", "Lower Dibang Valley", "Dibang Valley",
                "Anjaw", "Lohit", "Namsai", "Changlang", "Tirap", "Longding",
            ],
        ),
    );

    states.insert(
        "Assam".to_string(),
        record(
            "Subtropical with high rainfall",
            &["rice", "tea", "jute", "pulses", "oilseeds"],
            &["alluvial", "red"],
            "2000-3000mm",
            &[
                "Baksa", "Barpeta", "Biswanath", "Bongaigaon", "Cachar", "Charaideo",
                "Chirang", "Darrang", "Dhemaji", "Dhubri", "Dibrugarh", "Dima Hasao",
                "Goalpara", "Golaghat", "Hailakandi", "Hojai", "Jorhat", "Kamrup",
                "Kamrup Metropolitan", "Karbi Anglong", "Karimganj", "Kokrajhar",
                "Lakhimpur", "Majuli", "Morigaon", "Nagaon", "Nalbari", "Sivasagar",
                "Sonitpur", "South Salmara-Mankachar", "Tinsukia", "Udalguri",
                "West Karbi Anglong",
            ],
        ),
    );

    states.insert(
        "Bihar".to_string(),
        record(
            "Subtropical",
            &["rice", "wheat", "maize", "pulses", "sugarcane"],
            &["alluvial"],
            "1000-1400mm",
            &[
                "Araria", "Arwal", "Aurangabad", "Banka", "Begusarai", "Bhagalpur",
                "Bhojpur", "Buxar", "Darbhanga", "East Champaran", "Gaya", "Gopalganj",
                "Jamui", "Jehanabad", "Kaimur", "Katihar", "Khagaria", "Kishanganj",
                "Lakhisarai", "Madhepura", "Madhubani", "Munger", "Muzaffarpur", "Nalanda",
                "Nawada", "Patna", "Purnia", "Rohtas", "Saharsa", "Samastipur", "Saran",
                "Sheikhpura", "Sheohar", "Sitamarhi", "Siwan", "Supaul", "Vaishali",
                "West Champaran",
            ],
        ),
    );

    states.insert(
        "Chhattisgarh".to_string(),
        record(
            "Tropical",
            &["rice", "maize", "pulses", "oilseeds", "sugarcane"],
            &["red", "black"],
            "1200-1600mm",
            &[
                "Balod", "Baloda Bazar", "Balrampur", "Bastar", "Bemetara", "Bijapur",
                "Bilaspur", "Dantewada", "Dhamtari", "Durg", "Gariaband", "Janjgir-Champa",
                "Jashpur", "Kabirdham", "Kanker", "Kondagaon", "Korba", "Koriya",
                "Mahasamund", "Mungeli", "Narayanpur", "Raigarh", "Raipur", "Rajnandgaon",
                "Sukma", "Surajpur", "Surguja",
            ],
        ),
    );

    states.insert(
        "Goa".to_string(),
        record(
            "Tropical coastal",
            &["rice", "cashew", "coconut", "areca nut", "vegetables"],
            &["laterite", "alluvial"],
            "2500-3000mm",
            &["North Goa", "South Goa"],
        ),
    );

    states.insert(
        "Gujarat".to_string(),
        record(
            "Semi-arid to arid",
            &["cotton", "groundnut", "tobacco", "wheat", "bajra"],
            &["black", "alluvial", "sandy"],
            "400-1000mm",
            &[
                "Ahmedabad", "Amreli", "Anand", "Aravalli", "Banaskantha", "Bharuch",
                "Bhavnagar", "Botad", "Chhota Udaipur", "Dahod", "Dang", "Devbhoomi Dwarka",
                "Gandhinagar", "Gir Somnath", "Jamnagar", "Junagadh", "Kheda", "Kutch",
                "Mahisagar", "Mehsana", "Morbi", "Narmada", "Navsari", "Panchmahal",
                "Patan", "Porbandar", "Rajkot", "Sabarkantha", "Surat", "Surendranagar",
                "Tapi", "Vadodara", "Valsad",
            ],
        ),
    );

    states.insert(
        "Haryana".to_string(),
        record(
            "Semi-arid",
            &["wheat", "rice", "sugarcane", "cotton", "bajra"],
            &["alluvial", "sandy"],
            "400-600mm",
            &[
                "Ambala", "Bhiwani", "Charkhi Dadri", "Faridabad", "Fatehabad", "Gurugram",
                "Hisar", "Jhajjar", "Jind", "Kaithal", "Karnal", "Kurukshetra",
                "Mahendragarh", "Nuh", "Palwal", "Panchkula", "Panipat", "Rewari",
                "Rohtak", "Sirsa", "Sonipat", "Yamunanagar",
            ],
        ),
    );

    states.insert(
        "Himachal Pradesh".to_string(),
        record(
            "Temperate to alpine",
            &["wheat", "maize", "rice", "barley", "apples"],
            &["alluvial", "mountain"],
            "1000-2000mm",
            &[
                "Bilaspur", "Chamba", "Hamirpur", "Kangra", "Kinnaur", "Kullu",
                "Lahaul and Spiti", "Mandi", "Shimla", "Sirmaur", "Solan", "Una",
            ],
        ),
    );

    states.insert(
        "Jharkhand".to_string(),
        record(
            "Tropical to subtropical",
            &["rice", "maize", "pulses", "oilseeds", "vegetables"],
            &["red", "laterite"],
            "1200-1600mm",
            &[
                "Bokaro", "Chatra", "Deoghar", "Dhanbad", "Dumka", "East Singhbhum",
                "Garhwa", "Giridih", "Godda", "Gumla", "Hazaribagh", "Jamtara", "Khunti",
                "Koderma", "Latehar", "Lohardaga", "Pakur", "Palamu", "Ramgarh", "Ranchi",
                "Sahibganj", "Seraikela-Kharsawan", "Simdega", "West Singhbhum",
            ],
        ),
    );

    states.insert(
        "Karnataka".to_string(),
        record(
            "Tropical to semi-arid",
            &["rice", "ragi", "jowar", "cotton", "sugarcane"],
            &["red", "black", "laterite"],
            "600-3000mm",
            &[
                "Bagalkot", "Ballari", "Belagavi", "Bengaluru Rural", "Bengaluru Urban",
                "Bidar", "Chamarajanagar", "Chikkaballapur", "Chikkamagaluru",
                "Chitradurga", "Dakshina Kannada", "Davanagere", "Dharwad", "Gadag",
                "Hassan", "Haveri", "Kalaburagi", "Kodagu", "Kolar", "Koppal", "Mandya",
                "Mysuru", "Raichur", "Ramanagara", "Shivamogga", "Tumakuru", "Udupi",
                "Uttara Kannada", "Vijayapura", "Yadgir",
            ],
        ),
    );

    states.insert(
        "Kerala".to_string(),
        record(
            "Tropical humid",
            &["rice", "coconut", "rubber", "spices", "cashew"],
            &["laterite", "alluvial", "coastal"],
            "2500-3500mm",
            &[
                "Alappuzha", "Ernakulam", "Idukki", "Kannur", "Kasaragod", "Kollam",
                "Kottayam", "Kozhikode", "Malappuram", "Palakkad", "Pathanamthitta",
                "Thiruvananthapuram", "Thrissur", "Wayanad",
            ],
        ),
    );

    states.insert(
        "Madhya Pradesh".to_string(),
        record(
            "Tropical to subtropical",
            &["wheat", "soybean", "gram", "rice", "cotton"],
            &["black", "red", "alluvial"],
            "800-1600mm",
            &[
                "Agar Malwa", "Alirajpur", "Anuppur", "Ashoknagar", "Balaghat", "Barwani",
                "Betul", "Bhind", "Bhopal", "Burhanpur", "Chhatarpur", "Chhindwara",
                "Damoh", "Datia", "Dewas", "Dhar", "Dindori", "Guna", "Gwalior", "Harda",
                "Hoshangabad", "Indore", "Jabalpur", "Jhabua", "Katni", "Khandwa",
                "Khargone", "Mandla", "Mandsaur", "Morena", "Narsinghpur", "Neemuch",
                "Niwari", "Panna", "Raisen", "Rajgarh", "Ratlam", "Rewa", "Sagar",
                "Satna", "Sehore", "Seoni", "Shahdol", "Shajapur", "Sheopur", "Shivpuri",
                "Sidhi", "Singrauli", "Tikamgarh", "Ujjain", "Umaria", "Vidisha",
            ],
        ),
    );

    states.insert(
        "Maharashtra".to_string(),
        record(
            "Tropical to semi-arid",
            &["cotton", "sugarcane", "rice", "wheat", "pulses"],
            &["black", "red", "laterite"],
            "400-3000mm",
            &[
                "Ahmednagar", "Akola", "Amravati", "Aurangabad", "Beed", "Bhandara",
                "Buldhana", "Chandrapur", "Dhule", "Gadchiroli", "Gondia", "Hingoli",
                "Jalgaon", "Jalna", "Kolhapur", "Latur", "Mumbai City", "Mumbai Suburban",
                "Nagpur", "Nanded", "Nandurbar", "Nashik", "Osmanabad", "Palghar",
                "Parbhani", "Pune", "Raigad", "Ratnagiri", "Sangli", "Satara",
                "Sindhudurg", "Solapur", "Thane", "Wardha", "Washim", "Yavatmal",
            ],
        ),
    );

    states.insert(
        "Manipur".to_string(),
        record(
            "Subtropical to temperate",
            &["rice", "maize", "pulses", "oilseeds", "sugarcane"],
            &["red", "alluvial"],
            "1500-2500mm",
            &[
                "Bishnupur", "Chandel", "Churachandpur", "Imphal East", "Imphal West",
                "Jiribam", "Kakching", "Kamjong", "Kangpokpi", "Noney", "Pherzawl",
                "Senapati", "Tamenglong", "Tengnoupal", "Thoubal", "Ukhrul",
            ],
        ),
    );

    states.insert(
        "Meghalaya".to_string(),
        record(
            "Subtropical with heavy rainfall",
            &["rice", "maize", "potato", "pulses", "pineapple"],
            &["red", "laterite"],
            "2000-12000mm",
            &[
                "East Garo Hills", "East Jaintia Hills", "East Khasi Hills",
                "North Garo Hills", "Ri Bhoi", "South Garo Hills", "South West Garo Hills",
                "South West Khasi Hills", "West Garo Hills", "West Jaintia Hills",
                "West Khasi Hills",
            ],
        ),
    );

    states.insert(
        "Mizoram".to_string(),
        record(
            "Subtropical",
            &["rice", "maize", "pulses", "oilseeds", "cotton"],
            &["red", "laterite"],
            "2000-3000mm",
            &[
                "Aizawl", "Champhai", "Kolasib", "Lawngtlai", "Lunglei", "Mamit",
                "Saiha", "Serchhip",
            ],
        ),
    );

    states.insert(
        "Nagaland".to_string(),
        record(
            "Subtropical to temperate",
            &["rice", "maize", "millet", "pulses", "oilseeds"],
            &["red", "laterite"],
            "2000-2500mm",
            &[
                "Dimapur", "Kiphire", "Kohima", "Longleng", "Mokokchung", "Mon", "Peren",
                "Phek", "Tuensang", "Wokha", "Zunheboto",
            ],
        ),
    );

    states.insert(
        "Odisha".to_string(),
        record(
            "Tropical",
            &["rice", "pulses", "oilseeds", "jute", "sugarcane"],
            &["red", "laterite", "alluvial"],
            "1200-1600mm",
            &[
                "Angul", "Balangir", "Balasore", "Bargarh", "Bhadrak", "Boudh", "Cuttack",
                "Deogarh", "Dhenkanal", "Gajapati", "Ganjam", "Jagatsinghpur", "Jajpur",
                "Jharsuguda", "Kalahandi", "Kandhamal", "Kendrapara", "Kendujhar",
                "Khordha", "Koraput", "Malkangiri", "Mayurbhanj", "Nabarangpur",
                "Nayagarh", "Nuapada", "Puri", "Rayagada", "Sambalpur", "Subarnapur",
                "Sundargarh",
            ],
        ),
    );

    states.insert(
        "Punjab".to_string(),
        record(
            "Semi-arid to sub-humid",
            &["wheat", "rice", "cotton", "sugarcane", "maize"],
            &["alluvial"],
            "400-600mm",
            &[
                "Amritsar", "Barnala", "Bathinda", "Faridkot", "Fatehgarh Sahib",
                "Fazilka", "Ferozepur", "Gurdaspur", "Hoshiarpur", "Jalandhar",
                "Kapurthala", "Ludhiana", "Mansa", "Moga", "Mohali", "Muktsar",
                "Pathankot", "Patiala", "Rupnagar", "Sangrur",
                "Shaheed Bhagat Singh Nagar", "Tarn Taran",
            ],
        ),
    );

    states.insert(
        "Rajasthan".to_string(),
        record(
            "Arid to semi-arid",
            &["bajra", "wheat", "barley", "pulses", "mustard"],
            &["sandy", "alluvial"],
            "100-600mm",
            &[
                "Ajmer", "Alwar", "Banswara", "Baran", "Barmer", "Bharatpur", "Bhilwara",
                "Bikaner", "Bundi", "Chittorgarh", "Churu", "Dausa", "Dholpur",
                "Dungarpur", "Hanumangarh", "Jaipur", "Jaisalmer", "Jalore", "Jhalawar",
                "Jhunjhunu", "Jodhpur", "Karauli", "Kota", "Nagaur", "Pali", "Pratapgarh",
                "Rajsamand", "Sawai Madhopur", "Sikar", "Sirohi", "Sri Ganganagar",
                "Tonk", "Udaipur",
            ],
        ),
    );

    states.insert(
        "Sikkim".to_string(),
        record(
            "Temperate to alpine",
            &["maize", "rice", "wheat", "barley", "cardamom"],
            &["mountain", "alluvial"],
            "2000-3500mm",
            &["East Sikkim", "North Sikkim", "South Sikkim", "West Sikkim"],
        ),
    );

    states.insert(
        "Tamil Nadu".to_string(),
        record(
            "Tropical",
            &["rice", "sugarcane", "cotton", "groundnut", "millets"],
            &["red", "black", "alluvial"],
            "900-1400mm",
            &[
                "Ariyalur", "Chengalpattu", "Chennai", "Coimbatore", "Cuddalore",
                "Dharmapuri", "Dindigul", "Erode", "Kallakurichi", "Kanchipuram",
                "Kanyakumari", "Karur", "Krishnagiri", "Madurai", "Mayiladuthurai",
                "Nagapattinam", "Namakkal", "Nilgiris", "Perambalur", "Pudukkottai",
                "Ramanathapuram", "Ranipet", "Salem", "Sivaganga", "Tenkasi", "Thanjavur",
                "Theni", "Thoothukudi", "Tiruchirappalli", "Tirunelveli", "Tirupathur",
                "Tiruppur", "Tiruvallur", "Tiruvannamalai", "Tiruvarur", "Vellore",
                "Viluppuram", "Virudhunagar",
            ],
        ),
    );

    states.insert(
        "Telangana".to_string(),
        record(
            "Tropical",
            &["rice", "cotton", "maize", "sugarcane", "turmeric"],
            &["red", "black"],
            "900-1200mm",
            &[
                "Adilabad", "Bhadradri Kothagudem", "Hyderabad", "Jagtial", "Jangaon",
                "Jayashankar", "Jogulamba", "Kamareddy", "Karimnagar", "Khammam",
                "Kumuram Bheem", "Mahabubabad", "Mahbubnagar", "Mancherial", "Medak",
                "Medchal", "Nagarkurnool", "Nalgonda", "Nirmal", "Nizamabad",
                "Peddapalli", "Rajanna Sircilla", "Rangareddy", "Sangareddy", "Siddipet",
                "Suryapet", "Vikarabad", "Wanaparthy", "Warangal Rural", "Warangal Urban",
                "Yadadri Bhuvanagiri",
            ],
        ),
    );

    states.insert(
        "Tripura".to_string(),
        record(
            "Subtropical",
            &["rice", "jute", "tea", "rubber", "pineapple"],
            &["alluvial", "laterite"],
            "2000-2500mm",
            &[
                "Dhalai", "Gomati", "Khowai", "North Tripura", "Sepahijala",
                "South Tripura", "Unakoti", "West Tripura",
            ],
        ),
    );

    states.insert(
        "Uttar Pradesh".to_string(),
        record(
            "Subtropical",
            &["wheat", "rice", "sugarcane", "potato", "pulses"],
            &["alluvial"],
            "600-1200mm",
            &[
                "Agra", "Aligarh", "Prayagraj", "Ambedkar Nagar", "Amethi", "Amroha",
                "Auraiya", "Azamgarh", "Baghpat", "Bahraich", "Ballia", "Balrampur",
                "Banda", "Barabanki", "Bareilly", "Basti", "Bijnor", "Budaun",
                "Bulandshahr", "Chandauli", "Chitrakoot", "Deoria", "Etah", "Etawah",
                "Ayodhya", "Farrukhabad", "Fatehpur", "Firozabad", "Gautam Buddha Nagar",
                "Ghaziabad", "Ghazipur", "Gonda", "Gorakhpur", "Hamirpur", "Hapur",
                "Hardoi", "Hathras", "Jalaun", "Jaunpur", "Jhansi", "Kannauj",
                "Kanpur Dehat", "Kanpur Nagar", "Kasganj", "Kaushambi", "Kheri",
                "Kushinagar", "Lalitpur", "Lucknow", "Maharajganj", "Mahoba", "Mainpuri",
                "Mathura", "Mau", "Meerut", "Mirzapur", "Moradabad", "Muzaffarnagar",
                "Pilibhit", "Pratapgarh", "Raebareli", "Rampur", "Saharanpur", "Sambhal",
                "Sant Kabir Nagar", "Shahjahanpur", "Shamli", "Shravasti",
                "Siddharthnagar", "Sitapur", "Sonbhadra", "Sultanpur", "Unnao",
                "Varanasi",
            ],
        ),
    );

    states.insert(
        "Uttarakhand".to_string(),
        record(
            "Temperate to alpine",
            &["rice", "wheat", "sugarcane", "potato", "pulses"],
            &["alluvial", "mountain"],
            "1000-2000mm",
            &[
                "Almora", "Bageshwar", "Chamoli", "Champawat", "Dehradun", "Haridwar",
                "Nainital", "Pauri Garhwal", "Pithoragarh", "Rudraprayag",
                "Tehri Garhwal", "Udham Singh Nagar", "Uttarkashi",
            ],
        ),
    );

    states.insert(
        "West Bengal".to_string(),
        record(
            "Tropical to subtropical",
            &["rice", "jute", "tea", "potato", "wheat"],
            &["alluvial", "red", "laterite"],
            "1500-2500mm",
            &[
                "Alipurduar", "Bankura", "Birbhum", "Cooch Behar", "Dakshin Dinajpur",
                "Darjeeling", "Hooghly", "Howrah", "Jalpaiguri", "Jhargram", "Kalimpong",
                "Kolkata", "Malda", "Murshidabad", "Nadia", "North 24 Parganas",
                "Paschim Bardhaman", "Paschim Medinipur", "Purba Bardhaman",
                "Purba Medinipur", "Purulia", "South 24 Parganas", "Uttar Dinajpur",
            ],
        ),
    );

    states.insert(
        "Delhi".to_string(),
        record(
            "Semi-arid",
            &["wheat", "vegetables", "fruits", "flowers"],
            &["alluvial"],
            "600-700mm",
            &[
                "Central Delhi", "East Delhi", "New Delhi", "North Delhi",
                "North East Delhi", "North West Delhi", "Shahdara", "South Delhi",
                "South East Delhi", "South West Delhi", "West Delhi",
            ],
        ),
    );

    states.insert(
        "Jammu and Kashmir".to_string(),
        record(
            "Temperate to alpine",
            &["rice", "wheat", "maize", "barley", "apples"],
            &["alluvial", "mountain"],
            "400-1500mm",
            &[
                "Anantnag", "Bandipora", "Baramulla", "Budgam", "Doda", "Ganderbal",
                "Jammu", "Kathua", "Kishtwar", "Kulgam", "Kupwara", "Poonch", "Pulwama",
                "Rajouri", "Ramban", "Reasi", "Samba", "Shopian", "Srinagar", "Udhampur",
            ],
        ),
    );

    states.insert(
        "Ladakh".to_string(),
        record(
            "Cold desert",
            &["barley", "wheat", "peas", "apricot", "apple"],
            &["mountain", "desert"],
            "100-200mm",
            &["Kargil", "Leh"],
        ),
    );

    states
}
