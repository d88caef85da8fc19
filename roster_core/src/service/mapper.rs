//! Entity to DTO mapping, with relations reduced to by-id stubs.

use super::dto::{
    CountryDto, DepartmentDto, EmployeeDto, JobDto, JobHistoryDto, LocationDto, RegionDto,
    RelatedRef, TaskDto,
};
use crate::domain::{Country, Department, Employee, Job, JobHistory, Location, Region, Task};

impl From<&Region> for RegionDto {
    fn from(region: &Region) -> Self {
        Self {
            id: region.id,
            region_name: region.region_name.clone(),
        }
    }
}

impl From<&Country> for CountryDto {
    fn from(country: &Country) -> Self {
        Self {
            id: country.id,
            country_name: country.country_name.clone(),
            region: country.region_id.map(RelatedRef::new),
        }
    }
}

impl From<&Location> for LocationDto {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id,
            street_address: location.street_address.clone(),
            postal_code: location.postal_code.clone(),
            city: location.city.clone(),
            state_province: location.state_province.clone(),
            country: location.country_id.map(RelatedRef::new),
        }
    }
}

impl From<&Department> for DepartmentDto {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id,
            department_name: department.department_name.clone(),
            location: department.location_id.map(RelatedRef::new),
        }
    }
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
        }
    }
}

impl From<&Employee> for EmployeeDto {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone_number: employee.phone_number.clone(),
            hire_date: employee.hire_date,
            salary: employee.salary,
            commission_pct: employee.commission_pct,
            manager: employee.manager_id.map(RelatedRef::new),
            department: employee.department_id.map(RelatedRef::new),
        }
    }
}

impl From<&Job> for JobDto {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id,
            job_title: job.job_title.clone(),
            min_salary: job.min_salary,
            max_salary: job.max_salary,
            employee: job.employee_id.map(RelatedRef::new),
            tasks: job.task_ids.iter().copied().map(RelatedRef::new).collect(),
        }
    }
}

impl From<&JobHistory> for JobHistoryDto {
    fn from(history: &JobHistory) -> Self {
        Self {
            id: history.id,
            start_date: history.start_date,
            end_date: history.end_date,
            language: history.language,
            job: history.job_id.map(RelatedRef::new),
            department: history.department_id.map(RelatedRef::new),
            employee: history.employee_id.map(RelatedRef::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_relations_become_id_stubs() {
        let employee = Employee::new(3)
            .with_first_name("Ada")
            .with_manager(1)
            .with_department(2);

        let dto = EmployeeDto::from(&employee);
        assert_eq!(dto.first_name.as_deref(), Some("Ada"));
        assert_eq!(dto.manager, Some(RelatedRef::new(1)));
        assert_eq!(dto.department, Some(RelatedRef::new(2)));
    }

    #[test]
    fn test_job_maps_every_task_id() {
        let job = Job::new(1).with_task(10).with_task(11);
        let dto = JobDto::from(&job);
        assert_eq!(dto.tasks, vec![RelatedRef::new(10), RelatedRef::new(11)]);
    }

    #[test]
    fn test_dto_serializes_with_camel_case_keys() {
        let dto = CountryDto::from(&Country::new(4).with_country_name("Chile").with_region(9));
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["countryName"], "Chile");
        assert_eq!(json["region"]["id"], 9);
    }
}
